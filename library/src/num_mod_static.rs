//! Residues modulo a compile-time modulus.

use crate::math::gcd_crt::mod_inv;
use crate::math::prime::is_prime;
use std::iter::{Product, Sum};
use std::ops::*;

pub const DEFAULT_MODULUS: u64 = 1_000_000_007;

pub type Mint = ModInt<DEFAULT_MODULUS>;

// Invariant: 0 <= self.0 < M
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModInt<const M: u64>(u64);

impl<const M: u64> ModInt<M> {
    const VALID_MODULUS: () = assert!(
        M >= 1 && M <= i64::MAX as u64,
        "modulus must lie in [1, i64::MAX]"
    );
    // Larger moduli go through extended Euclid, keeping const evaluation cheap.
    const USE_FERMAT: bool = M < (1 << 32) && is_prime(M as i64);

    pub const fn modulus() -> u64 {
        M
    }

    pub fn new(v: i64) -> Self {
        let () = Self::VALID_MODULUS;
        Self(v.rem_euclid(M as i64) as u64)
    }

    pub fn zero() -> Self {
        Self::new(0)
    }

    pub fn one() -> Self {
        Self::new(1)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn pow(self, mut exp: u64) -> Self {
        let mut res = Self::one();
        let mut base = self;
        while exp > 0 {
            if exp & 1 == 1 {
                res *= base;
            }
            base *= base;
            exp >>= 1;
        }
        res
    }

    // Zero when no inverse exists. Dividing by such a value is a logic error.
    pub fn inv(self) -> Self {
        if self.0 == 0 {
            return Self::zero();
        }
        if Self::USE_FERMAT {
            return self.pow(M - 2);
        }
        let x = mod_inv(self.0 as i64, M as i64);
        if x == 0 && M > 1 {
            tracing::trace!(value = self.0, modulus = M, "no modular inverse");
        }
        Self(x as u64)
    }
}

// Goes through new() so an invalid modulus fails to compile here too.
impl<const M: u64> Default for ModInt<M> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const M: u64> AddAssign for ModInt<M> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
        if self.0 >= M {
            self.0 -= M;
        }
    }
}

impl<const M: u64> SubAssign for ModInt<M> {
    fn sub_assign(&mut self, rhs: Self) {
        if self.0 < rhs.0 {
            self.0 += M;
        }
        self.0 -= rhs.0;
    }
}

impl<const M: u64> MulAssign for ModInt<M> {
    fn mul_assign(&mut self, rhs: Self) {
        self.0 = (self.0 as u128 * rhs.0 as u128 % M as u128) as u64;
    }
}

impl<const M: u64> DivAssign for ModInt<M> {
    fn div_assign(&mut self, rhs: Self) {
        self.mul_assign(rhs.inv());
    }
}

macro_rules! forward_binop {
    ($OpAssign:ident $op_assign:ident, $Op:ident $op:ident) => {
        impl<const M: u64> $Op for ModInt<M> {
            type Output = Self;
            fn $op(mut self, rhs: Self) -> Self {
                self.$op_assign(rhs);
                self
            }
        }
    };
}
forward_binop!(AddAssign add_assign, Add add);
forward_binop!(SubAssign sub_assign, Sub sub);
forward_binop!(MulAssign mul_assign, Mul mul);
forward_binop!(DivAssign div_assign, Div div);

impl<const M: u64> Neg for ModInt<M> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::zero() - self
    }
}

impl<const M: u64> Sum for ModInt<M> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl<const M: u64> Product for ModInt<M> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), Mul::mul)
    }
}

macro_rules! impl_from_signed {
    ($($s:ty)+) => {
        $(
            impl<const M: u64> From<$s> for ModInt<M> {
                fn from(n: $s) -> Self {
                    Self::new(n as i64)
                }
            }
        )+
    };
}
impl_from_signed!(i8 i16 i32 i64);

macro_rules! impl_from_unsigned {
    ($($u:ty)+) => {
        $(
            impl<const M: u64> From<$u> for ModInt<M> {
                fn from(n: $u) -> Self {
                    let () = Self::VALID_MODULUS;
                    Self((n as u64) % M)
                }
            }
        )+
    };
}
impl_from_unsigned!(u8 u16 u32 u64 usize);

impl<const M: u64> From<ModInt<M>> for u64 {
    fn from(n: ModInt<M>) -> Self {
        n.0
    }
}

impl<const M: u64> std::fmt::Debug for ModInt<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl<const M: u64> std::fmt::Display for ModInt<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
