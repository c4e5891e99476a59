use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;
use core::ops::Index;

use crate::raw::{RawIter, RawTreeMap};

mod capacity;
mod integrity;
mod order_statistic;

pub use crate::Rank;

/// An ordered symbol table backed by an unbalanced [binary search tree].
///
/// Keys must implement [`Ord`]; each key is stored at most once. Besides the
/// usual map operations the table answers sorted-order queries: [`min`],
/// [`max`], [`floor`], [`ceiling`], [`rank`], [`select`] and inclusive range
/// counts and listings. Every node caches the size of its subtree, so the
/// order-statistic queries cost one root-to-leaf descent.
///
/// No rebalancing is performed. Operations are proportional to the depth of
/// the tree, which is logarithmic for keys inserted in random order but
/// linear when keys arrive sorted.
///
/// It is a logic error for a key to be modified in such a way that the key's ordering relative to
/// any other key, as determined by the [`Ord`] trait, changes while it is in the map. The
/// behavior resulting from such a logic error is not specified, but will be encapsulated to the
/// `OrderedTreeMap` that observed it and not result in undefined behavior. [`check`] can be used
/// to detect the damage.
///
/// # Examples
///
/// ```
/// use ordered_tree_map::OrderedTreeMap;
///
/// let mut table = OrderedTreeMap::new();
/// for (key, value) in [(5, "e"), (3, "c"), (8, "h"), (1, "a"), (4, "d"), (7, "g"), (9, "i")] {
///     table.insert(key, value);
/// }
///
/// assert_eq!(table.len(), 7);
/// assert_eq!(table.min(), Some(&1));
/// assert_eq!(table.max(), Some(&9));
/// assert_eq!(table.rank(&7), 4);
/// assert_eq!(table.select(4), Some(&7));
/// assert_eq!(table.range_keys(&3, &8), [3, 4, 5, 7, 8]);
/// assert_eq!(table.floor(&6), Some(&5));
/// assert_eq!(table.ceiling(&6), Some(&7));
///
/// table.remove(&5);
/// assert!(!table.contains_key(&5));
/// assert_eq!(table.len(), 6);
/// assert!(table.check().is_ok());
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [`min`]: OrderedTreeMap::min
/// [`max`]: OrderedTreeMap::max
/// [`floor`]: OrderedTreeMap::floor
/// [`ceiling`]: OrderedTreeMap::ceiling
/// [`rank`]: OrderedTreeMap::rank
/// [`select`]: OrderedTreeMap::select
/// [`check`]: OrderedTreeMap::check
pub struct OrderedTreeMap<K, V> {
    raw: RawTreeMap<K, V>,
}

/// An iterator over the entries of an `OrderedTreeMap`, in ascending key order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedTreeMap`].
///
/// [`iter`]: OrderedTreeMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: RawIter<'a, K, V>,
}

impl<K, V> OrderedTreeMap<K, V> {
    /// Makes a new, empty `OrderedTreeMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let mut map = OrderedTreeMap::new();
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> OrderedTreeMap<K, V> {
        OrderedTreeMap {
            raw: RawTreeMap::new(),
        }
    }

    /// Clears the map, releasing every node.
    ///
    /// # Complexity
    ///
    /// O(n)
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let mut a = OrderedTreeMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the number of elements in the map.
    ///
    /// Read from the root's cached subtree size, so this is O(1).
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let mut a = OrderedTreeMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the smallest key, or `None` if the map is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let mut map = OrderedTreeMap::new();
    /// assert_eq!(map.min(), None);
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.min(), Some(&1));
    /// ```
    #[must_use]
    pub fn min(&self) -> Option<&K> {
        self.raw.first_key_value().map(|(key, _)| key)
    }

    /// Returns the largest key, or `None` if the map is empty.
    #[must_use]
    pub fn max(&self) -> Option<&K> {
        self.raw.last_key_value().map(|(key, _)| key)
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first_key_value()
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last_key_value()
    }

    /// Removes and returns the entry with the smallest key, or `None` if the
    /// map is empty.
    ///
    /// The removed node is replaced by its right child.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let mut map = OrderedTreeMap::from([(1, "a"), (2, "b")]);
    /// assert_eq!(map.delete_min(), Some((1, "a")));
    /// assert_eq!(map.delete_min(), Some((2, "b")));
    /// assert_eq!(map.delete_min(), None);
    /// ```
    pub fn delete_min(&mut self) -> Option<(K, V)> {
        self.raw.delete_min()
    }

    /// Removes and returns the entry with the largest key, or `None` if the
    /// map is empty.
    ///
    /// The removed node is replaced by its left child.
    pub fn delete_max(&mut self) -> Option<(K, V)> {
        self.raw.delete_max()
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let map = OrderedTreeMap::from([(3, "c"), (2, "b"), (1, "a")]);
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: RawIter::new(&self.raw),
        }
    }
}

impl<K: Ord, V> OrderedTreeMap<K, V> {
    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the ordering
    /// on the borrowed form *must* match the ordering on the key type.
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
    /// let mut map = OrderedTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns the stored key and its value.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_key_value(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let mut map = OrderedTreeMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.contains_key(key)
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, a new leaf node is attached
    /// and `None` is returned.
    ///
    /// If the key was present, its value is overwritten in place and the old
    /// value is returned. The tree's shape and sizes do not change.
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
    /// let mut map = OrderedTreeMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map[&37], "c");
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning its value if it was present.
    ///
    /// Uses Hibbard deletion: a node with two children is not unlinked but
    /// takes over the entry of its in-order successor (the minimum of its
    /// right subtree), and the successor's node is removed instead. Repeated
    /// deletions therefore tend to skew the tree to the left.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let mut map = OrderedTreeMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove_entry(key)
    }

    /// Returns the largest key less than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let map = OrderedTreeMap::from([(10, ()), (20, ())]);
    /// assert_eq!(map.floor(&15), Some(&10));
    /// assert_eq!(map.floor(&20), Some(&20));
    /// assert_eq!(map.floor(&5), None);
    /// ```
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.floor(key)
    }

    /// Returns the smallest key greater than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let map = OrderedTreeMap::from([(10, ()), (20, ())]);
    /// assert_eq!(map.ceiling(&15), Some(&20));
    /// assert_eq!(map.ceiling(&10), Some(&10));
    /// assert_eq!(map.ceiling(&25), None);
    /// ```
    pub fn ceiling<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.ceiling(key)
    }

    /// Returns the number of keys in the inclusive range `[low, high]`.
    ///
    /// Computed from two [`rank`](Self::rank) queries and one lookup rather
    /// than by visiting the keys. An inverted range (`low > high`) is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let map: OrderedTreeMap<i32, ()> = (1..=10).map(|k| (k * 10, ())).collect();
    /// assert_eq!(map.range_len(&20, &50), 4);
    /// assert_eq!(map.range_len(&25, &49), 2);
    /// assert_eq!(map.range_len(&50, &20), 0);
    /// ```
    pub fn range_len<Q>(&self, low: &Q, high: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.range_len(low, high)
    }

    /// Returns the keys in the inclusive range `[low, high]`, in ascending order.
    ///
    /// Only subtrees that can overlap the range are visited. An inverted range
    /// (`low > high`) is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let map = OrderedTreeMap::from([("ant", 1), ("bee", 2), ("cat", 3), ("dog", 4)]);
    /// assert_eq!(map.range_keys("b", "d"), ["bee", "cat"]);
    /// ```
    pub fn range_keys<Q>(&self, low: &Q, high: &Q) -> Vec<K>
    where
        K: Borrow<Q> + Clone,
        Q: ?Sized + Ord,
    {
        self.raw.range_keys(low, high)
    }

    /// Returns every key in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree_map::OrderedTreeMap;
    ///
    /// let map = OrderedTreeMap::from([(2, 'b'), (3, 'c'), (1, 'a')]);
    /// assert_eq!(map.keys(), [1, 2, 3]);
    /// ```
    #[must_use]
    pub fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.raw.keys()
    }
}

impl<K: Clone, V: Clone> Clone for OrderedTreeMap<K, V> {
    fn clone(&self) -> Self {
        OrderedTreeMap {
            raw: self.raw.clone(),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedTreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<K: Eq, V: Eq> Eq for OrderedTreeMap<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedTreeMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Default for OrderedTreeMap<K, V> {
    fn default() -> Self {
        OrderedTreeMap::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for OrderedTreeMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = OrderedTreeMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for OrderedTreeMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for OrderedTreeMap<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedTreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// Looks up a value by key.
///
/// # Panics
///
/// Panics if the key is not present in the map.
impl<K, Q, V> Index<&Q> for OrderedTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    type Output = V;

    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let handle = self.inner.next()?;
        let node = self.inner.tree().node(handle);
        Some((node.key(), node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.inner.remaining()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter").field("remaining", &self.inner.remaining()).finish()
    }
}
