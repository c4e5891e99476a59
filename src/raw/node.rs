use super::handle::Handle;
use super::size::Size;

/// A single binary search tree node.
///
/// The node is the sole owner of its children: no other node or map field
/// holds `left` or `right`.
pub(crate) struct Node<K, V> {
    pub(super) key: K,
    pub(super) value: V,
    pub(super) left: Option<Handle>,
    pub(super) right: Option<Handle>,
    // 1 + size(left) + size(right)
    pub(super) size: Size,
}

impl<K, V> Node<K, V> {
    /// Creates a childless node, i.e. a subtree of size one.
    pub(crate) fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            size: Size::ONE,
        }
    }

    #[inline]
    pub(crate) fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    pub(crate) fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// The key stays shared: changing it in place could break the ordering.
    #[inline]
    pub(crate) fn split_mut(&mut self) -> (&K, &mut V) {
        (&self.key, &mut self.value)
    }

    #[inline]
    pub(crate) fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) fn right(&self) -> Option<Handle> {
        self.right
    }

    /// Returns the cached size of the subtree rooted here.
    #[inline]
    pub(crate) fn size(&self) -> usize {
        self.size.to_usize()
    }

    pub(crate) fn into_entry(self) -> (K, V) {
        (self.key, self.value)
    }
}
