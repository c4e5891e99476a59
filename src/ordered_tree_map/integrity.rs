use super::OrderedTreeMap;
use crate::IntegrityError;

impl<K, V> OrderedTreeMap<K, V> {
    /// Returns the height of the tree, or `None` if the map is empty.
    ///
    /// A single node has height 0. Without rebalancing the height ranges from
    /// about `log2(len)` up to `len - 1` for keys inserted in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let sorted: OrderedTreeMap<i32, ()> = (0..8).map(|k| (k, ())).collect();
    /// assert_eq!(sorted.height(), Some(7));
    ///
    /// let balanced = OrderedTreeMap::from([(2, ()), (1, ()), (3, ())]);
    /// assert_eq!(balanced.height(), Some(1));
    /// ```
    #[must_use]
    pub fn height(&self) -> Option<usize> {
        self.raw.height()
    }
}

/// Self-checks for tests and debugging. Each one walks the whole tree and none
/// of them runs as part of an ordinary operation.
impl<K: Ord, V> OrderedTreeMap<K, V> {
    /// Verifies the three structural invariants: symmetric order, subtree
    /// sizes and rank/select agreement.
    ///
    /// Every failing check is logged; the first one is returned.
    ///
    /// # Errors
    ///
    /// Returns the first [`IntegrityError`] found, in the order listed above.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let mut map: OrderedTreeMap<u32, ()> = (0..100).map(|k| (k * 7 % 100, ())).collect();
    /// map.remove(&42);
    /// assert_eq!(map.check(), Ok(()));
    /// ```
    pub fn check(&self) -> Result<(), IntegrityError> {
        self.raw.check()
    }

    /// Returns `true` if every key lies strictly between the keys of the
    /// ancestors that bound it.
    #[must_use]
    pub fn is_bst(&self) -> bool {
        self.raw.is_bst()
    }

    /// Returns `true` if every cached subtree size equals
    /// `1 + size(left) + size(right)`.
    #[must_use]
    pub fn is_size_consistent(&self) -> bool {
        self.raw.is_size_consistent()
    }

    /// Returns `true` if `rank(select(i)) == i` for every position and
    /// `select(rank(key)) == key` for every key.
    #[must_use]
    pub fn is_rank_consistent(&self) -> bool {
        self.raw.is_rank_consistent()
    }
}
