//! Disjoint set (union-find) over provisional labels
//!
//! Each provisional label indexes one slot; slots 0 and 1 exist but are never
//! used, so a label can be looked up without an offset.
//!
//! `find` always compresses the traversed path onto the root. `unite` does
//! no balancing: the root of the first argument is attached under the root
//! of the second. Union by rank or size would be a drop-in replacement that
//! leaves every partition unchanged and only shortens the trees.

use crate::error::{RegionError, RegionResult};

/// Disjoint set over the labels `0..len`
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<u32>,
}

impl DisjointSet {
    /// Create a set of `n` singleton classes, `parent[i] = i`.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n as u32).collect(),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Check whether the set has no slots.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Find the representative of `i`'s class, compressing the path.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`. Use [`DisjointSet::try_find`] for a checked
    /// lookup.
    pub fn find(&mut self, i: u32) -> u32 {
        let mut root = i;
        while self.parent[root as usize] != root {
            root = self.parent[root as usize];
        }

        let mut node = i;
        while node != root {
            let next = self.parent[node as usize];
            self.parent[node as usize] = root;
            node = next;
        }

        root
    }

    /// Find the representative of `i`'s class.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::LabelOutOfRange`] if `i >= len()`.
    pub fn try_find(&mut self, i: u32) -> RegionResult<u32> {
        if i as usize >= self.parent.len() {
            return Err(RegionError::LabelOutOfRange {
                label: i,
                len: self.parent.len(),
            });
        }
        Ok(self.find(i))
    }

    /// Merge the classes of `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either label is out of range.
    pub fn unite(&mut self, i: u32, j: u32) {
        let root_i = self.find(i);
        let root_j = self.find(j);
        if root_i != root_j {
            self.parent[root_i as usize] = root_j;
        }
    }

    /// Check whether `i` is the representative of its class.
    pub fn is_root(&self, i: u32) -> bool {
        self.parent.get(i as usize) == Some(&i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_singletons() {
        let mut set = DisjointSet::new(6);
        assert_eq!(set.len(), 6);
        for i in 0..6 {
            assert!(set.is_root(i));
            assert_eq!(set.find(i), i);
        }
    }

    #[test]
    fn test_unite_attaches_first_root_under_second() {
        let mut set = DisjointSet::new(5);
        set.unite(2, 3);
        assert_eq!(set.find(2), 3);
        assert_eq!(set.find(3), 3);
        assert!(!set.is_root(2));
    }

    #[test]
    fn test_unite_same_class_is_noop() {
        let mut set = DisjointSet::new(5);
        set.unite(2, 3);
        set.unite(3, 2);
        assert_eq!(set.find(2), set.find(3));
        assert_eq!(set.find(3), 3);
    }

    #[test]
    fn test_find_compresses_path() {
        let mut set = DisjointSet::new(10);
        // Chain 2 -> 3 -> 4 -> 5 -> 6
        for i in 2..6 {
            set.unite(i, i + 1);
        }
        assert_eq!(set.parent[2], 3);
        assert_eq!(set.find(2), 6);
        for i in 2..6 {
            assert_eq!(set.parent[i], 6, "slot {i} not rewired");
        }
    }

    #[test]
    fn test_find_idempotent() {
        let mut set = DisjointSet::new(12);
        let pairs = [(2, 5), (7, 2), (9, 10), (10, 5), (3, 4)];
        for (a, b) in pairs {
            set.unite(a, b);
        }
        for i in 0..12 {
            let r = set.find(i);
            assert_eq!(set.find(r), r);
        }
        assert_eq!(set.find(7), set.find(9));
        assert_ne!(set.find(3), set.find(2));
    }

    #[test]
    fn test_try_find_out_of_range() {
        let mut set = DisjointSet::new(4);
        assert_eq!(set.try_find(3).unwrap(), 3);
        let err = set.try_find(4).unwrap_err();
        assert!(matches!(
            err,
            RegionError::LabelOutOfRange { label: 4, len: 4 }
        ));
    }

    #[test]
    #[should_panic]
    fn test_find_out_of_range_panics() {
        let mut set = DisjointSet::new(4);
        set.find(9);
    }

    #[test]
    fn test_long_chain_does_not_recurse() {
        let n = 200_000u32;
        let mut set = DisjointSet::new(n as usize);
        for i in 2..n - 1 {
            set.unite(i, i + 1);
        }
        assert_eq!(set.find(2), n - 1);
    }
}
