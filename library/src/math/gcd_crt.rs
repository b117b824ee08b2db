fn gcd_unsigned(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn saturate(x: i128) -> i64 {
    x.clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

// Non-negative; gcd(i64::MIN, 0) saturates to i64::MAX.
pub fn gcd(a: i64, b: i64) -> i64 {
    saturate(gcd_unsigned(a.unsigned_abs(), b.unsigned_abs()) as i128)
}

// Non-negative, saturating at i64::MAX.
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    let (a, b) = (a.unsigned_abs(), b.unsigned_abs());
    let l = (a / gcd_unsigned(a, b)) as u128 * b as u128;
    i64::try_from(l).unwrap_or(i64::MAX)
}

// Extended euclidean algorithm
// find (d, x, y) satisfying d = gcd(a, b) and a * x + b * y = d
// Stepping runs in i128; only d = 2^63 saturates.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut r, mut s, mut t) = ((a as i128, b as i128), (1i128, 0i128), (0i128, 1i128));
    while r.1 != 0 {
        let q = r.0 / r.1;
        r = (r.1, r.0 - q * r.1);
        s = (s.1, s.0 - q * s.1);
        t = (t.1, t.0 - q * t.1);
    }
    if r.0 < 0 {
        (r.0, s.0, t.0) = (-r.0, -s.0, -t.0);
    }
    (saturate(r.0), saturate(s.0), saturate(t.0))
}

// Inverse of a modulo m, or 0 if gcd(a, m) != 1.
pub fn mod_inv(a: i64, m: i64) -> i64 {
    if m <= 0 {
        return 0;
    }
    let (d, x, _) = extended_gcd(a.rem_euclid(m), m);
    if d != 1 {
        return 0;
    }
    x.rem_euclid(m)
}
