use smallvec::SmallVec;

use super::handle::Handle;
use super::raw_tree_map::RawTreeMap;

/// Pending nodes of an in-order walk: each entry's left subtree is already
/// done, the node itself and its right subtree are not.
type Spine = SmallVec<[Handle; 32]>;

/// In-order walk over node handles with an explicit stack, so iteration does
/// not recurse even when the tree has degenerated into a path.
pub(crate) struct RawIter<'a, K, V> {
    tree: &'a RawTreeMap<K, V>,
    spine: Spine,
    remaining: usize,
}

impl<'a, K, V> RawIter<'a, K, V> {
    pub(crate) fn new(tree: &'a RawTreeMap<K, V>) -> Self {
        let mut iter = Self {
            tree,
            spine: Spine::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<Handle>) {
        while let Some(handle) = node {
            self.spine.push(handle);
            node = self.tree.node(handle).left();
        }
    }

    pub(crate) fn tree(&self) -> &'a RawTreeMap<K, V> {
        self.tree
    }

    pub(crate) fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<K, V> Clone for RawIter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            spine: self.spine.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K, V> Iterator for RawIter<'_, K, V> {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        let handle = self.spine.pop()?;
        self.push_left_spine(self.tree.node(handle).right());
        self.remaining -= 1;
        Some(handle)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
