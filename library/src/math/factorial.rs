//! Lazily grown factorial and inverse factorial tables.

use crate::error::{Error, Result};
use crate::fatal::fatal;
use crate::num_mod_static::ModInt;
use crate::result::ResultExt;

pub const DEFAULT_CEILING: usize = 10_000_000;

// Grows monotonically up to `ceiling` and never shrinks. Growth needs `&mut`;
// share across threads behind a lock.
#[derive(Clone, Debug)]
pub struct FactorialTable<const M: u64> {
    ceiling: usize,
    fac: Vec<ModInt<M>>,
    ifac: Vec<ModInt<M>>,
}

impl<const M: u64> Default for FactorialTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const M: u64> FactorialTable<M> {
    pub fn new() -> Self {
        Self::with_ceiling(DEFAULT_CEILING)
    }

    pub fn with_ceiling(ceiling: usize) -> Self {
        Self {
            ceiling,
            fac: vec![ModInt::one()],
            ifac: vec![ModInt::one()],
        }
    }

    pub fn ceiling(&self) -> usize {
        self.ceiling
    }

    // Number of cached entries, i.e. the table covers 0..len()
    pub fn len(&self) -> usize {
        self.fac.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fac.is_empty()
    }

    fn grow(&mut self, n: usize) -> Result<()> {
        if n > self.ceiling {
            return Err(Error::CeilingExceeded {
                requested: n,
                ceiling: self.ceiling,
            });
        }
        let old = self.fac.len();
        if n < old {
            return Ok(());
        }
        tracing::debug!(from = old - 1, to = n, "growing factorial table");

        self.fac.reserve(n + 1 - old);
        for i in old..=n {
            let prev = self.fac[i - 1];
            self.fac.push(prev * ModInt::from(i));
        }

        self.ifac.resize(n + 1, ModInt::zero());
        let top = self.fac[n].inv();
        if top * self.fac[n] == ModInt::one() {
            self.ifac[n] = top;
            for i in (old..n).rev() {
                self.ifac[i] = self.ifac[i + 1] * ModInt::from(i + 1);
            }
        } else {
            // fac[n] shares a factor with M; smaller entries may still be invertible
            for i in old..=n {
                self.ifac[i] = self.fac[i].inv();
            }
        }
        Ok(())
    }

    pub fn try_factorial(&mut self, n: usize) -> Result<ModInt<M>> {
        self.grow(n)?;
        Ok(self.fac[n])
    }

    pub fn try_inv_factorial(&mut self, n: usize) -> Result<ModInt<M>> {
        self.grow(n)?;
        Ok(self.ifac[n])
    }

    // Aborts the process past the ceiling.
    pub fn factorial(&mut self, n: usize) -> ModInt<M> {
        self.try_factorial(n).otherwise(|e| fatal(&e.to_string()))
    }

    pub fn inv_factorial(&mut self, n: usize) -> ModInt<M> {
        self.try_inv_factorial(n).otherwise(|e| fatal(&e.to_string()))
    }

    // n choose r
    pub fn combinations(&mut self, n: usize, r: usize) -> ModInt<M> {
        if r > n {
            return ModInt::zero();
        }
        self.factorial(n) * self.inv_factorial(r) * self.inv_factorial(n - r)
    }

    // n permute r
    pub fn permutations(&mut self, n: usize, r: usize) -> ModInt<M> {
        if r > n {
            return ModInt::zero();
        }
        self.factorial(n) * self.inv_factorial(n - r)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::num_mod_static::Mint;
    use tracing_test::traced_test;

    fn comb_naive(n: usize, r: usize) -> u64 {
        let mut row = vec![1u64];
        for _ in 0..n {
            let mut next = vec![1u64; row.len() + 1];
            for j in 1..row.len() {
                next[j] = (row[j - 1] + row[j]) % 1_000_000_007;
            }
            row = next;
        }
        row.get(r).copied().unwrap_or(0)
    }

    #[test]
    fn small_values() {
        let mut table = FactorialTable::<1_000_000_007>::new();
        assert_eq!(table.factorial(0).value(), 1);
        assert_eq!(table.factorial(5).value(), 120);
        assert_eq!(table.factorial(20).value(), 146_326_063);
        for n in 0..=20 {
            assert_eq!(table.factorial(n) * table.inv_factorial(n), Mint::one());
        }
    }

    #[test]
    fn grows_monotonically() {
        let mut table = FactorialTable::<1_000_000_007>::new();
        assert_eq!(table.len(), 1);
        table.factorial(10);
        assert_eq!(table.len(), 11);
        table.factorial(3);
        assert_eq!(table.len(), 11);
        table.inv_factorial(30);
        assert_eq!(table.len(), 31);
        for n in 0..=30 {
            assert_eq!(table.inv_factorial(n), table.factorial(n).inv());
        }
    }

    #[test]
    fn binomials_against_naive() {
        let mut table = FactorialTable::<1_000_000_007>::new();
        for n in 0..60 {
            for r in 0..65 {
                assert_eq!(table.combinations(n, r).value(), comb_naive(n, r), "{:?}", (n, r));
            }
        }
        assert_eq!(table.permutations(5, 2).value(), 20);
        assert_eq!(table.permutations(5, 6).value(), 0);
        assert_eq!(table.combinations(1000, 500).value(), comb_naive(1000, 500));
    }

    #[test]
    fn small_prime_modulus() {
        let mut table = FactorialTable::<7>::new();
        table.factorial(3);
        assert_eq!(table.factorial(10).value(), 0);
        for n in 0..7 {
            assert_eq!(table.inv_factorial(n) * table.factorial(n), ModInt::one());
        }
        assert_eq!(table.inv_factorial(8).value(), 0);
    }

    #[test]
    fn ceiling() {
        let mut table = FactorialTable::<1_000_000_007>::with_ceiling(100);
        assert_eq!(table.ceiling(), 100);
        assert!(table.try_factorial(100).is_ok());
        assert_eq!(
            table.try_factorial(101),
            Err(Error::CeilingExceeded {
                requested: 101,
                ceiling: 100
            })
        );
        assert!(table.try_inv_factorial(101).is_err());
        assert_eq!(table.len(), 101);
        assert_eq!(FactorialTable::<7>::default().ceiling(), DEFAULT_CEILING);
    }

    #[test]
    #[traced_test]
    fn logs_growth() {
        let mut table = FactorialTable::<1_000_000_007>::new();
        table.factorial(8);
        assert!(logs_contain("growing factorial table"));
    }
}
