use core::borrow::Borrow;
use core::cmp::Ordering;
use core::mem;

use super::arena::Arena;
use super::handle::Handle;
use super::node::Node;
use super::size::Size;

/// The unbalanced, size-augmented binary search tree backing `OrderedTreeMap`.
///
/// Every structural edit is a node rewrite: a helper receives the root of a
/// subtree, performs the edit below it, and returns the (possibly different)
/// root of the same subtree. The caller stores that handle back into the slot
/// it descended through, and subtree sizes are recomputed while unwinding.
pub(crate) struct RawTreeMap<K, V> {
    /// Arena storing all tree nodes.
    pub(super) nodes: Arena<Node<K, V>>,
    /// Handle to the root node, if the tree is non-empty.
    pub(super) root: Option<Handle>,
}

impl<K, V> RawTreeMap<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the number of key-value pairs in the tree.
    pub(crate) fn len(&self) -> usize {
        self.size_of(self.root)
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Releases every node.
    pub(crate) fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(released = self.nodes.len(), "clear");

        self.nodes.clear();
        self.root = None;
    }

    pub(crate) fn root(&self) -> Option<Handle> {
        self.root
    }

    pub(crate) fn node(&self, handle: Handle) -> &Node<K, V> {
        self.nodes.get(handle)
    }

    pub(crate) fn node_mut(&mut self, handle: Handle) -> &mut Node<K, V> {
        self.nodes.get_mut(handle)
    }

    /// Size of an optional subtree; an empty slot counts zero.
    #[inline]
    pub(crate) fn size_of(&self, node: Option<Handle>) -> usize {
        node.map_or(0, |handle| self.nodes.get(handle).size())
    }

    /// Recomputes the cached size of `handle` from its children.
    fn update_size(&mut self, handle: Handle) {
        let node = self.nodes.get(handle);
        let size = 1 + self.size_of(node.left) + self.size_of(node.right);
        self.nodes.get_mut(handle).size = Size::from_usize(size);
    }

    /// Height of the tree; a lone root has height zero.
    pub(crate) fn height(&self) -> Option<usize> {
        self.height_at(self.root)
    }

    fn height_at(&self, node: Option<Handle>) -> Option<usize> {
        let node = self.nodes.get(node?);
        let below = match (self.height_at(node.left), self.height_at(node.right)) {
            (None, None) => return Some(0),
            (left, right) => left.max(right).unwrap_or_default(),
        };
        Some(below + 1)
    }

    /// Unlinks the leftmost node of the subtree at `handle`.
    ///
    /// Returns the rewritten subtree root and the detached node, whose slot is
    /// still allocated. The detached node is replaced by its right child.
    fn detach_min(&mut self, handle: Handle) -> (Option<Handle>, Handle) {
        let node = self.nodes.get(handle);
        let Some(left) = node.left else {
            return (node.right, handle);
        };
        let (rest, min) = self.detach_min(left);
        self.nodes.get_mut(handle).left = rest;
        self.update_size(handle);
        (Some(handle), min)
    }

    /// Mirror of [`Self::detach_min`]: the rightmost node is replaced by its left child.
    fn detach_max(&mut self, handle: Handle) -> (Option<Handle>, Handle) {
        let node = self.nodes.get(handle);
        let Some(right) = node.right else {
            return (node.left, handle);
        };
        let (rest, max) = self.detach_max(right);
        self.nodes.get_mut(handle).right = rest;
        self.update_size(handle);
        (Some(handle), max)
    }

    /// Removes the smallest entry, or returns `None` if the tree is empty.
    pub(crate) fn delete_min(&mut self) -> Option<(K, V)> {
        let root = self.root?;
        let (rest, min) = self.detach_min(root);
        self.root = rest;

        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len(), "delete_min");

        Some(self.nodes.take(min).into_entry())
    }

    /// Removes the largest entry, or returns `None` if the tree is empty.
    pub(crate) fn delete_max(&mut self) -> Option<(K, V)> {
        let root = self.root?;
        let (rest, max) = self.detach_max(root);
        self.root = rest;

        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len(), "delete_max");

        Some(self.nodes.take(max).into_entry())
    }
}

impl<K: Ord, V> RawTreeMap<K, V> {
    /// Inserts `key`, or overwrites the value in place if `key` is present.
    /// Returns the previous value.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (root, previous) = self.insert_at(self.root, key, value);
        self.root = Some(root);

        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len(), replaced = previous.is_some(), "insert");

        previous
    }

    fn insert_at(&mut self, node: Option<Handle>, key: K, value: V) -> (Handle, Option<V>) {
        let Some(handle) = node else {
            return (self.nodes.alloc(Node::leaf(key, value)), None);
        };

        let current = self.nodes.get(handle);
        let (left, right) = (current.left, current.right);
        let previous = match key.cmp(&current.key) {
            Ordering::Less => {
                let (left, previous) = self.insert_at(left, key, value);
                self.nodes.get_mut(handle).left = Some(left);
                previous
            }
            Ordering::Greater => {
                let (right, previous) = self.insert_at(right, key, value);
                self.nodes.get_mut(handle).right = Some(right);
                previous
            }
            // Overwrite: no node is created, so no size changes on the path.
            Ordering::Equal => {
                let previous = mem::replace(&mut self.nodes.get_mut(handle).value, value);
                return (handle, Some(previous));
            }
        };

        self.update_size(handle);
        (handle, previous)
    }

    /// Removes `key` using Hibbard deletion, returning the stored entry.
    pub(crate) fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let (root, removed) = self.remove_at(self.root, key);
        self.root = root;

        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len(), removed = removed.is_some(), "remove");

        removed
    }

    fn remove_at<Q>(&mut self, node: Option<Handle>, key: &Q) -> (Option<Handle>, Option<(K, V)>)
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some(handle) = node else {
            return (None, None);
        };

        let current = self.nodes.get(handle);
        let (left, right) = (current.left, current.right);
        let removed = match key.cmp(current.key.borrow()) {
            Ordering::Less => {
                let (left, removed) = self.remove_at(left, key);
                self.nodes.get_mut(handle).left = left;
                removed
            }
            Ordering::Greater => {
                let (right, removed) = self.remove_at(right, key);
                self.nodes.get_mut(handle).right = right;
                removed
            }
            Ordering::Equal => match (left, right) {
                // Zero or one child: splice the node out, the child takes its slot.
                (None, child) | (child, None) => {
                    let entry = self.nodes.take(handle).into_entry();
                    return (child, Some(entry));
                }
                // Two children: this node survives and takes over the content of
                // its in-order successor, which is unlinked from the right subtree.
                (Some(_), Some(right)) => {
                    let (rest, successor) = self.detach_min(right);
                    let successor = self.nodes.take(successor);
                    let current = self.nodes.get_mut(handle);
                    current.right = rest;
                    let key = mem::replace(&mut current.key, successor.key);
                    let value = mem::replace(&mut current.value, successor.value);
                    Some((key, value))
                }
            },
        };

        self.update_size(handle);
        (Some(handle), removed)
    }
}

impl<K: Clone, V: Clone> Clone for RawTreeMap<K, V> {
    /// Copies the tree node for node, so the clone has the same shape.
    fn clone(&self) -> Self {
        fn clone_node<K: Clone, V: Clone>(
            old_nodes: &Arena<Node<K, V>>,
            new_nodes: &mut Arena<Node<K, V>>,
            old_handle: Handle,
        ) -> Handle {
            let old = old_nodes.get(old_handle);
            let left = old.left.map(|child| clone_node(old_nodes, new_nodes, child));
            let right = old.right.map(|child| clone_node(old_nodes, new_nodes, child));
            new_nodes.alloc(Node {
                key: old.key.clone(),
                value: old.value.clone(),
                left,
                right,
                size: old.size,
            })
        }

        let mut nodes = Arena::with_capacity(self.nodes.len());
        let root = self.root.map(|root| clone_node(&self.nodes, &mut nodes, root));
        Self { nodes, root }
    }
}
