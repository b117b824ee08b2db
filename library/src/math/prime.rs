// Trial division over the 6k +- 1 wheel.
pub const fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 || n % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i <= n / i {
        if n % i == 0 || n % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

// Prime factors with multiplicity, in increasing order.
pub fn factors(n: i64) -> Vec<i64> {
    let mut res = Vec::new();
    let mut x = n;
    let mut p = 2;
    while p <= x / p {
        while x % p == 0 {
            res.push(p);
            x /= p;
        }
        p += 1;
    }
    if x > 1 {
        res.push(x);
    }
    res
}

// Prime factors grouped as (p, exponent).
pub fn factorize(n: i64) -> Vec<(i64, u32)> {
    let mut res: Vec<(i64, u32)> = Vec::new();
    for p in factors(n) {
        match res.last_mut() {
            Some((q, exp)) if *q == p => *exp += 1,
            _ => res.push((p, 1)),
        }
    }
    res
}

// All positive divisors in increasing order. Empty for n <= 1.
pub fn divisors(n: i64) -> Vec<i64> {
    if n <= 1 {
        return Vec::new();
    }
    let mut res = vec![1];
    for (p, exp) in factorize(n) {
        let len = res.len();
        let mut pk = 1;
        for _ in 0..exp {
            pk *= p;
            for i in 0..len {
                res.push(res[i] * pk);
            }
        }
    }
    res.sort_unstable();
    res
}
