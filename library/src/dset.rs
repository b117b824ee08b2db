use std::{cell::Cell, mem};

#[derive(Clone, Debug)]
pub struct DisjointSet {
    // Cell allows path compression through &self
    parent: Vec<Cell<u32>>,
    rank: Vec<u8>,
}

impl DisjointSet {
    pub fn new(n: usize) -> Self {
        assert!(n as u64 <= 1 << 32, "too many elements");
        Self {
            parent: (0..n).map(|u| Cell::new(u as u32)).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn find_root(&self, u: usize) -> usize {
        let p = self.parent[u].get() as usize;
        if p == u {
            return u;
        }
        let root = self.find_root(p);
        self.parent[u].set(root as u32);
        root
    }

    // None if u is out of range
    pub fn find(&self, u: usize) -> Option<usize> {
        (u < self.len()).then(|| self.find_root(u))
    }

    // Returns true iff two sets were previously disjoint
    pub fn unite(&mut self, u: usize, v: usize) -> bool {
        let (Some(mut u), Some(mut v)) = (self.find(u), self.find(v)) else {
            return false;
        };
        if u == v {
            return false;
        }

        if self.rank[u] < self.rank[v] {
            mem::swap(&mut u, &mut v);
        }
        self.parent[v].set(u as u32);
        if self.rank[u] == self.rank[v] {
            self.rank[u] += 1;
        }
        tracing::trace!(root = u, child = v, rank = self.rank[u], "linked sets");
        true
    }

    pub fn connected(&self, u: usize, v: usize) -> bool {
        match (self.find(u), self.find(v)) {
            (Some(u), Some(v)) => u == v,
            _ => false,
        }
    }

    // O(n), not cached
    pub fn components(&self) -> usize {
        (0..self.len())
            .filter(|&u| self.parent[u].get() as usize == u)
            .count()
    }
}
