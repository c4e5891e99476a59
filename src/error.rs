use thiserror::Error;

/// A structural invariant that [`OrderedTreeMap::check`] found broken.
///
/// These never arise from the public API; they indicate memory corruption or a
/// key type whose `Ord` implementation changed while keys were stored.
///
/// [`OrderedTreeMap::check`]: crate::OrderedTreeMap::check
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum IntegrityError {
    /// Some key is not strictly between the bounds its ancestors impose.
    #[error("Not in symmetric order")]
    NotSymmetricOrder,

    /// Some node's cached size differs from `1 + size(left) + size(right)`.
    #[error("Subtree counts not consistent")]
    SizeInconsistent,

    /// `rank` and `select` disagree for some key or position.
    #[error("Ranks not consistent")]
    RankInconsistent,
}
