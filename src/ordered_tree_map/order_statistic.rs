use core::borrow::Borrow;
use core::ops::{Index, IndexMut};

use super::OrderedTreeMap;
use crate::Rank;

impl<K, V> OrderedTreeMap<K, V> {
    /// Returns the key at position `k` in sorted order (zero-based), or `None`
    /// if `k >= len()`.
    ///
    /// The descent compares `k` with the size of each node's left subtree.
    ///
    /// # Complexity
    ///
    /// O(depth)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let map = OrderedTreeMap::from([("a", 10), ("c", 30), ("b", 20)]);
    /// assert_eq!(map.select(1), Some(&"b"));
    /// assert_eq!(map.select(3), None);
    /// ```
    #[must_use]
    pub fn select(&self, k: usize) -> Option<&K> {
        self.raw.get_by_rank(k).map(|(key, _)| key)
    }

    /// Returns the entry at position `rank` in sorted order, or `None` if
    /// `rank` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let mut map = OrderedTreeMap::new();
    /// map.insert("a", 10);
    /// map.insert("c", 30);
    /// map.insert("b", 20);
    ///
    /// assert_eq!(map.get_by_rank(1), Some((&"b", &20)));
    /// assert!(map.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.get_by_rank(rank)
    }

    /// Returns the key and a mutable reference to the value at position `rank`.
    ///
    /// The key is returned as a shared reference because mutating it would
    /// violate the map's ordering invariants.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let mut map = OrderedTreeMap::new();
    /// map.insert(10, "a");
    /// map.insert(5, "b");
    ///
    /// if let Some((key, value)) = map.get_by_rank_mut(0) {
    ///     assert_eq!(*key, 5);
    ///     *value = "updated";
    /// }
    ///
    /// assert_eq!(map.get(&5), Some(&"updated"));
    /// ```
    #[must_use]
    pub fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        self.raw.get_by_rank_mut(rank)
    }
}

impl<K: Ord, V> OrderedTreeMap<K, V> {
    /// Returns the number of keys strictly less than `key`.
    ///
    /// `key` does not have to be present: the result is the position it
    /// would occupy if inserted. An empty map ranks every key at 0.
    ///
    /// # Complexity
    ///
    /// O(depth)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let map = OrderedTreeMap::from([(10, "a"), (20, "b"), (30, "c")]);
    /// assert_eq!(map.rank(&10), 0);
    /// assert_eq!(map.rank(&30), 2);
    /// assert_eq!(map.rank(&25), 2);
    /// assert_eq!(map.rank(&99), 3);
    /// ```
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank(key)
    }

    /// Returns the rank of `key` if it is present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let map = OrderedTreeMap::from([(10, "a"), (20, "b")]);
    /// assert_eq!(map.rank_of(&20), Some(1));
    /// assert_eq!(map.rank_of(&15), None);
    /// ```
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.contains_key(key).then(|| self.rank(key))
    }
}

/// Indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use ordered_tree_map::{OrderedTreeMap, Rank};
///
/// let map = OrderedTreeMap::from([("a", 1), ("b", 2)]);
/// assert_eq!(map[Rank(0)], 1);
/// ```
impl<K, V> Index<Rank> for OrderedTreeMap<K, V> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).map(|(_, v)| v).expect("rank out of bounds")
    }
}

/// Mutably indexes into the map by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use ordered_tree_map::{OrderedTreeMap, Rank};
///
/// let mut map = OrderedTreeMap::from([("a", 1), ("b", 2)]);
/// map[Rank(1)] = 5;
///
/// assert_eq!(map.get(&"b"), Some(&5));
/// ```
impl<K, V> IndexMut<Rank> for OrderedTreeMap<K, V> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.get_by_rank_mut(rank.0).map(|(_, v)| v).expect("rank out of bounds")
    }
}
