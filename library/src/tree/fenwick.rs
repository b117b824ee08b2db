pub trait Group {
    type Elem: Clone;
    fn id(&self) -> Self::Elem;
    fn add_assign(&self, lhs: &mut Self::Elem, rhs: Self::Elem);
    fn sub_assign(&self, lhs: &mut Self::Elem, rhs: Self::Elem);
}

// Integers under wrapping addition. Range sums stay exact whenever the true
// sum fits in an i64, even if some prefix overflowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct Additive;

impl Group for Additive {
    type Elem = i64;
    fn id(&self) -> i64 {
        0
    }
    fn add_assign(&self, lhs: &mut i64, rhs: i64) {
        *lhs = lhs.wrapping_add(rhs);
    }
    fn sub_assign(&self, lhs: &mut i64, rhs: i64) {
        *lhs = lhs.wrapping_sub(rhs);
    }
}

// Logical slots 0..n, stored 1-based in sum[1..=n].
#[derive(Clone)]
pub struct FenwickTree<G: Group = Additive> {
    n: usize,
    group: G,
    sum: Vec<G::Elem>,
}

impl FenwickTree<Additive> {
    pub fn new(n: usize) -> Self {
        Self::with_group(n, Additive)
    }
}

impl<G: Group> FenwickTree<G> {
    pub fn with_group(n: usize, group: G) -> Self {
        let sum = (0..=n).map(|_| group.id()).collect();
        Self { n, group, sum }
    }

    pub fn from_iter(iter: impl IntoIterator<Item = G::Elem>, group: G) -> Self {
        let mut sum = vec![group.id()];
        sum.extend(iter);
        let n = sum.len() - 1;

        for i in 1..=n {
            let j = i + (i & i.wrapping_neg());
            if j <= n {
                let child = sum[i].clone();
                group.add_assign(&mut sum[j], child);
            }
        }
        Self { n, group, sum }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    // No-op outside [0, n).
    pub fn update(&mut self, idx: i64, delta: G::Elem) {
        if idx < 0 || idx as u64 >= self.n as u64 {
            return;
        }
        let mut i = idx as usize + 1;
        while i <= self.n {
            self.group.add_assign(&mut self.sum[i], delta.clone());
            i += i & i.wrapping_neg();
        }
    }

    // Inclusive prefix sum over [0, idx], with idx clamped to n - 1.
    pub fn query(&self, idx: i64) -> G::Elem {
        let mut res = self.group.id();
        if idx < 0 || self.n == 0 {
            return res;
        }
        let mut i = (idx as u64).min(self.n as u64 - 1) as usize + 1;
        while i > 0 {
            self.group.add_assign(&mut res, self.sum[i].clone());
            i &= i - 1;
        }
        res
    }

    // Inclusive range sum over [l, r]; empty or disjoint ranges give the identity.
    pub fn range_query(&self, l: i64, r: i64) -> G::Elem {
        if l > r || r < 0 || l as i128 >= self.n as i128 {
            return self.group.id();
        }
        let mut res = self.query(r);
        self.group.sub_assign(&mut res, self.query(l.saturating_sub(1)));
        res
    }

    pub fn get(&self, idx: i64) -> G::Elem {
        self.range_query(idx, idx)
    }
}
