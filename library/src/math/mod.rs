pub mod checked;
pub mod factorial;
pub mod gcd_crt;
pub mod isqrt;
pub mod mod_arith;
pub mod prime;

pub use checked::*;
pub use gcd_crt::{extended_gcd, gcd, lcm, mod_inv};
pub use isqrt::{isqrt, is_square};
pub use mod_arith::{mod_floor, power};
pub use prime::{divisors, factors, is_prime};
