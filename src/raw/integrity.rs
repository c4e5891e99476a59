use super::handle::Handle;
use super::iter::RawIter;
use super::raw_tree_map::RawTreeMap;
use crate::error::IntegrityError;

// Full-traversal diagnostics. Nothing on the mutation path calls these.
impl<K: Ord, V> RawTreeMap<K, V> {
    /// Runs every check, logging each one that fails, and reports the first failure.
    pub(crate) fn check(&self) -> Result<(), IntegrityError> {
        let failures = [
            (self.is_bst(), IntegrityError::NotSymmetricOrder),
            (self.is_size_consistent(), IntegrityError::SizeInconsistent),
            (self.is_rank_consistent(), IntegrityError::RankInconsistent),
        ];

        let mut first = None;
        for (_, error) in failures.into_iter().filter(|(passed, _)| !passed) {
            #[cfg(feature = "tracing")]
            tracing::warn!(%error, len = self.len(), "integrity check failed");

            first.get_or_insert(error);
        }
        first.map_or(Ok(()), Err)
    }

    /// Every key lies strictly between the bounds inherited from its ancestors.
    /// Strictness also rules out duplicate keys.
    pub(crate) fn is_bst(&self) -> bool {
        self.is_bst_at(self.root(), None, None)
    }

    fn is_bst_at(&self, node: Option<Handle>, min: Option<&K>, max: Option<&K>) -> bool {
        let Some(handle) = node else {
            return true;
        };
        let node = self.node(handle);
        let key = node.key();

        if min.is_some_and(|min| key <= min) || max.is_some_and(|max| key >= max) {
            return false;
        }
        self.is_bst_at(node.left(), min, Some(key)) && self.is_bst_at(node.right(), Some(key), max)
    }

    pub(crate) fn is_size_consistent(&self) -> bool {
        self.is_size_consistent_at(self.root())
    }

    fn is_size_consistent_at(&self, node: Option<Handle>) -> bool {
        let Some(handle) = node else {
            return true;
        };
        let node = self.node(handle);

        node.size() == 1 + self.size_of(node.left()) + self.size_of(node.right())
            && self.is_size_consistent_at(node.left())
            && self.is_size_consistent_at(node.right())
    }

    /// `rank(select(i)) == i` for every position and `select(rank(k)) == k`
    /// for every stored key.
    pub(crate) fn is_rank_consistent(&self) -> bool {
        let positions_agree = (0..self.len()).all(|i| {
            self.select_node(i)
                .is_some_and(|handle| self.rank(self.node(handle).key()) == i)
        });

        positions_agree
            && RawIter::new(self).all(|handle| {
                let key = self.node(handle).key();
                self.select_node(self.rank(key))
                    .is_some_and(|found| self.node(found).key() == key)
            })
    }
}
