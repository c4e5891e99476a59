use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering;

use super::handle::Handle;
use super::raw_tree_map::RawTreeMap;

impl<K, V> RawTreeMap<K, V> {
    /// Leftmost node below `handle`. Iterative, so a degenerate tree cannot
    /// exhaust the stack here.
    pub(crate) fn min_below(&self, mut handle: Handle) -> Handle {
        while let Some(left) = self.node(handle).left() {
            handle = left;
        }
        handle
    }

    /// Rightmost node below `handle`.
    pub(crate) fn max_below(&self, mut handle: Handle) -> Handle {
        while let Some(right) = self.node(handle).right() {
            handle = right;
        }
        handle
    }

    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        let node = self.node(self.min_below(self.root()?));
        Some((node.key(), node.value()))
    }

    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        let node = self.node(self.max_below(self.root()?));
        Some((node.key(), node.value()))
    }

    /// Returns the node whose rank is `k`, or `None` when `k >= len`.
    pub(crate) fn select_node(&self, k: usize) -> Option<Handle> {
        self.select_at(self.root(), k)
    }

    fn select_at(&self, node: Option<Handle>, k: usize) -> Option<Handle> {
        let handle = node?;
        let current = self.node(handle);
        // Number of keys below this node in sorted order.
        let t = self.size_of(current.left());
        match k.cmp(&t) {
            Ordering::Less => self.select_at(current.left(), k),
            Ordering::Greater => self.select_at(current.right(), k - t - 1),
            Ordering::Equal => Some(handle),
        }
    }

    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        let node = self.node(self.select_node(rank)?);
        Some((node.key(), node.value()))
    }

    pub(crate) fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        let handle = self.select_node(rank)?;
        let node = self.node_mut(handle);
        let (key, value) = node.split_mut();
        Some((key, value))
    }
}

impl<K: Ord, V> RawTreeMap<K, V> {
    /// Finds the node holding `key`. Every descent ends in an explicit match
    /// or in an empty child slot.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root();
        while let Some(handle) = current {
            let node = self.node(handle);
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).map(|handle| self.node(handle).value())
    }

    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = self.search(key)?;
        Some(self.node_mut(handle).value_mut())
    }

    pub(crate) fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let node = self.node(self.search(key)?);
        Some((node.key(), node.value()))
    }

    pub(crate) fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.search(key).is_some()
    }

    /// Largest key less than or equal to `key`.
    pub(crate) fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.floor_at(self.root(), key).map(|handle| self.node(handle).key())
    }

    fn floor_at<Q>(&self, node: Option<Handle>, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = node?;
        let current = self.node(handle);
        match key.cmp(current.key().borrow()) {
            Ordering::Equal => Some(handle),
            // Everything at or right of this node is too large.
            Ordering::Less => self.floor_at(current.left(), key),
            // This node qualifies unless the right subtree has a closer one.
            Ordering::Greater => self.floor_at(current.right(), key).or(Some(handle)),
        }
    }

    /// Smallest key greater than or equal to `key`.
    pub(crate) fn ceiling<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.ceiling_at(self.root(), key).map(|handle| self.node(handle).key())
    }

    fn ceiling_at<Q>(&self, node: Option<Handle>, key: &Q) -> Option<Handle>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let handle = node?;
        let current = self.node(handle);
        match key.cmp(current.key().borrow()) {
            Ordering::Equal => Some(handle),
            Ordering::Greater => self.ceiling_at(current.right(), key),
            Ordering::Less => self.ceiling_at(current.left(), key).or(Some(handle)),
        }
    }

    /// Number of keys strictly less than `key`. `key` need not be present.
    pub(crate) fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut count = 0;
        let mut current = self.root();
        while let Some(handle) = current {
            let node = self.node(handle);
            current = match key.cmp(node.key().borrow()) {
                Ordering::Less => node.left(),
                Ordering::Greater => {
                    // This node and its whole left subtree precede `key`.
                    count += self.size_of(node.left()) + 1;
                    node.right()
                }
                Ordering::Equal => return count + self.size_of(node.left()),
            };
        }
        count
    }

    /// Number of keys in `[low, high]`, from two rank queries and a lookup.
    pub(crate) fn range_len<Q>(&self, low: &Q, high: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        if low > high {
            return 0;
        }
        let below_high = self.rank(high) + usize::from(self.contains_key(high));
        below_high - self.rank(low)
    }

    /// Keys in `[low, high]` in ascending order.
    ///
    /// Walks the tree in order and skips every subtree that lies entirely
    /// outside the range, so only `Ord` is required of the key type.
    pub(crate) fn range_keys<Q>(&self, low: &Q, high: &Q) -> Vec<K>
    where
        K: Borrow<Q> + Clone,
        Q: ?Sized + Ord,
    {
        let mut keys = Vec::new();
        if low <= high {
            self.collect_range(self.root(), low, high, &mut keys);
        }
        keys
    }

    fn collect_range<Q>(&self, node: Option<Handle>, low: &Q, high: &Q, keys: &mut Vec<K>)
    where
        K: Borrow<Q> + Clone,
        Q: ?Sized + Ord,
    {
        let Some(handle) = node else {
            return;
        };
        let current = self.node(handle);
        let key: &Q = current.key().borrow();

        if low < key {
            self.collect_range(current.left(), low, high, keys);
        }
        if low <= key && key <= high {
            keys.push(current.key().clone());
        }
        if high > key {
            self.collect_range(current.right(), low, high, keys);
        }
    }

    /// All keys in ascending order.
    pub(crate) fn keys(&self) -> Vec<K>
    where
        K: Clone,
    {
        match (self.first_key_value(), self.last_key_value()) {
            (Some((min, _)), Some((max, _))) => self.range_keys(min, max),
            _ => Vec::new(),
        }
    }
}
