use super::OrderedTreeMap;
use crate::raw::RawTreeMap;

impl<K, V> OrderedTreeMap<K, V> {
    /// Creates an empty map with node storage for at least `capacity` entries.
    ///
    /// Nodes released by removals are recycled before storage grows, so a map
    /// whose size stays within `capacity` does not reallocate.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let map: OrderedTreeMap<i32, i32> = OrderedTreeMap::with_capacity(32);
    /// assert!(map.is_empty());
    /// assert!(map.capacity() >= 32);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        OrderedTreeMap {
            raw: RawTreeMap::with_capacity(capacity),
        }
    }

    /// Returns the number of entries the map can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }
}
