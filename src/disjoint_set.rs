//! A disjoint-set forest (union-find) over element indices `0..len`.
//!
//! Elements start as singleton sets. Sets only ever merge, through [`DisjointSet::union`].

/// A partition of `0..len` into disjoint sets, stored as a parent index per element.
///
/// Roots are the elements that are their own parent. Unions attach the smaller set's root under
/// the larger set's root, which keeps parent chains short enough that [`DisjointSet::find`] needs
/// no path compression and can borrow immutably.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parents: Vec<usize>,
    /// Element count per root; stale for non-roots.
    sizes: Vec<usize>,
    component_count: usize,
}

impl DisjointSet {
    /// Create `len` singleton sets.
    pub fn new(len: usize) -> Self {
        Self {
            parents: (0..len).collect(),
            sizes: vec![1; len],
            component_count: len,
        }
    }

    /// The number of elements.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    /// The number of disjoint sets.
    pub fn component_count(&self) -> usize {
        self.component_count
    }

    /// Find the root of the set containing `element`.
    ///
    /// # Panics
    ///
    /// If `element` is out of range.
    pub fn find(&self, element: usize) -> usize {
        let mut current = element;
        while self.parents[current] != current {
            current = self.parents[current];
        }
        current
    }

    /// Merge the sets containing `a` and `b`.
    ///
    /// Returns `false` without changes when both are already in the same set.
    ///
    /// # Panics
    ///
    /// If either element is out of range.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        // ties keep the first argument's root
        let (root, child) = if self.sizes[root_a] >= self.sizes[root_b] {
            (root_a, root_b)
        } else {
            (root_b, root_a)
        };
        self.parents[child] = root;
        self.sizes[root] += self.sizes[child];
        self.component_count -= 1;
        true
    }

    /// The size of every set, in order of each set's root index.
    pub fn component_sizes(&self) -> Vec<usize> {
        let mut counts = vec![0; self.len()];
        for element in 0..self.len() {
            counts[self.find(element)] += 1;
        }
        counts.into_iter().filter(|count| *count > 0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_as_singletons() {
        let set = DisjointSet::new(4);
        assert_eq!(set.len(), 4);
        assert_eq!(set.component_count(), 4);
        assert_eq!(set.component_sizes(), vec![1, 1, 1, 1]);
        for element in 0..4 {
            assert_eq!(set.find(element), element);
        }
    }

    #[test]
    fn union_of_pairs_links_transitively() {
        let mut set = DisjointSet::new(5);
        assert!(set.union(0, 1));
        assert!(set.union(2, 3));
        assert_ne!(set.find(0), set.find(3));

        assert!(set.union(1, 2));
        assert_eq!(set.find(0), set.find(3));
        assert_ne!(set.find(0), set.find(4));
        assert_eq!(set.component_count(), 2);

        let mut sizes = set.component_sizes();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 4]);
    }

    #[test]
    fn union_within_a_set_changes_nothing() {
        let mut set = DisjointSet::new(3);
        assert!(!set.union(1, 1));
        assert_eq!(set.component_sizes(), vec![1, 1, 1]);

        set.union(0, 2);
        let before = set.component_sizes();
        assert!(!set.union(2, 0));
        assert!(!set.union(0, 0));
        assert_eq!(set.component_sizes(), before);
        assert_eq!(set.component_count(), 2);
    }

    #[test]
    fn component_sizes_sum_to_len() {
        let mut set = DisjointSet::new(10);
        for (a, b) in [(0, 9), (1, 8), (9, 8), (3, 3), (4, 5), (5, 6), (6, 4), (2, 7)] {
            set.union(a, b);
            assert_eq!(set.component_sizes().iter().sum::<usize>(), set.len());
            assert_eq!(set.component_sizes().len(), set.component_count());
        }
    }

    #[test]
    fn union_order_changes_roots_not_sizes() {
        let pairs = [(0, 1), (2, 3), (1, 3), (4, 5)];

        let mut forward = DisjointSet::new(6);
        for (a, b) in pairs {
            forward.union(a, b);
        }
        let mut backward = DisjointSet::new(6);
        for (a, b) in pairs.into_iter().rev() {
            backward.union(b, a);
        }

        let mut forward_sizes = forward.component_sizes();
        let mut backward_sizes = backward.component_sizes();
        forward_sizes.sort_unstable();
        backward_sizes.sort_unstable();
        assert_eq!(forward_sizes, backward_sizes);
        assert_eq!(forward_sizes, vec![2, 4]);
    }

    #[test]
    fn empty_set_has_no_components() {
        let set = DisjointSet::new(0);
        assert_eq!(set.component_count(), 0);
        assert!(set.component_sizes().is_empty());
    }
}
