//! Division and overflow helpers.
//!
//! Two policies coexist on purpose. `ceil_div`, `floor_div`, `safe_div` and
//! `safe_mod` return the sentinel `0` for a zero divisor, while `try_div` and
//! `try_mod` report it as an [`Error`].

use crate::error::{Error, Result};

// Rounds toward +inf.
pub fn ceil_div(a: i64, b: i64) -> i64 {
    if b == 0 {
        return 0;
    }
    let q = a.saturating_div(b);
    let r = a.wrapping_rem(b);
    if r != 0 && (r > 0) == (b > 0) {
        q + 1
    } else {
        q
    }
}

// Rounds toward -inf.
pub fn floor_div(a: i64, b: i64) -> i64 {
    if b == 0 {
        return 0;
    }
    let q = a.saturating_div(b);
    let r = a.wrapping_rem(b);
    if r != 0 && (r > 0) != (b > 0) {
        q - 1
    } else {
        q
    }
}

pub fn safe_div(a: i64, b: i64) -> i64 {
    if b == 0 {
        0
    } else {
        a.saturating_div(b)
    }
}

pub fn safe_mod(a: i64, b: i64) -> i64 {
    if b == 0 {
        0
    } else {
        a.wrapping_rem(b)
    }
}

pub fn try_div(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        return Err(Error::DivisionByZero);
    }
    a.checked_div(b).ok_or(Error::Overflow)
}

pub fn try_mod(a: i64, b: i64) -> Result<i64> {
    if b == 0 {
        return Err(Error::ModuloByZero);
    }
    a.checked_rem(b).ok_or(Error::Overflow)
}

pub fn try_sqrt(x: f64) -> Result<f64> {
    if x < 0.0 {
        return Err(Error::NegativeSqrt);
    }
    Ok(x.sqrt())
}

pub fn sat_add(a: i64, b: i64) -> i64 {
    a.saturating_add(b)
}

pub fn sat_sub(a: i64, b: i64) -> i64 {
    a.saturating_sub(b)
}

// Exponentiation without modulus. Clamps to MAX or MIN, following the sign
// of the exact result. Negative exponents truncate to 0 (except for |base| = 1).
pub fn sat_pow(base: i64, exp: i64) -> i64 {
    match (base, exp) {
        (_, 0) => 1,
        (1, _) => 1,
        (-1, _) => {
            if exp % 2 == 0 {
                1
            } else {
                -1
            }
        }
        (_, e) if e < 0 => 0,
        _ => {
            // Any |base| >= 2 saturates long before u32::MAX; keep the parity.
            let exp = u32::try_from(exp).unwrap_or(u32::MAX - 1 + (exp % 2) as u32);
            base.saturating_pow(exp)
        }
    }
}
