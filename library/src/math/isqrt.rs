// Floor square root of a non-negative integer.
pub fn isqrt(x: i64) -> i64 {
    debug_assert!(x >= 0);
    let mut r = (x as f64).sqrt() as i64;
    // f64 loses precision above 2^53
    while r > 0 && r.checked_mul(r).map_or(true, |sq| sq > x) {
        r -= 1;
    }
    while (r + 1).checked_mul(r + 1).map_or(false, |sq| sq <= x) {
        r += 1;
    }
    r
}

pub fn is_square(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let r = isqrt(n);
    r * r == n
}
