//! Disjoint-set (union-find) over dense element indices.
//!
//! Used by Kruskal's algorithm for cycle detection. Elements are `usize`
//! indices handed out by [`DisjointSet::make_set`]; callers that track
//! richer keys map them to indices themselves.

use std::cmp::Ordering;

/// Union-find with path compression and union by rank.
#[derive(Debug, Clone, Default)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates an empty structure.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            parent: Vec::new(),
            rank: Vec::new(),
        }
    }

    /// Creates a structure pre-populated with `count` singleton sets,
    /// indexed `0..count`.
    #[must_use]
    pub fn with_sets(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
            rank: vec![0; count],
        }
    }

    /// Adds a new singleton set and returns its index.
    pub fn make_set(&mut self) -> usize {
        let index = self.parent.len();
        self.parent.push(index);
        self.rank.push(0);
        index
    }

    /// Number of elements across all sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Compresses the walked path so repeated queries flatten toward the
    /// root.
    ///
    /// # Panics
    ///
    /// Panics if `x` was never handed out by this structure.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point every visited element directly at the root.
        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` when both already belong to the same set (the merge
    /// would close a cycle), `true` when two distinct sets were joined.
    ///
    /// # Panics
    ///
    /// Panics if either index was never handed out by this structure.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            Ordering::Less => self.parent[root_a] = root_b,
            Ordering::Greater => self.parent[root_b] = root_a,
            Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            },
        }
        true
    }

    /// Tests whether `a` and `b` belong to the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
