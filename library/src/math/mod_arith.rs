// Canonical residue in [0, m), for m > 0.
pub fn mod_floor(x: i64, m: i64) -> i64 {
    debug_assert!(m > 0);
    x.rem_euclid(m)
}

// base^exp mod m. The base may be negative or out of range.
// A non-positive modulus yields the sentinel 0.
pub fn power(base: i64, mut exp: u64, m: i64) -> i64 {
    if m <= 0 {
        return 0;
    }
    let m = m as u128;
    let mut base = base.rem_euclid(m as i64) as u128;
    let mut result = 1 % m;
    while exp > 0 {
        if exp % 2 == 1 {
            result = result * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    result as i64
}
