use core::num::NonZero;

// Narrow handles under test so the capacity limit is cheap to reach.
#[cfg(test)]
type RawIndex = u16;
#[cfg(not(test))]
type RawIndex = u32;

/// Index of a node slot in the arena.
///
/// Stored off by one inside a `NonZero`, so `Option<Handle>` (an empty child
/// slot) costs no more than a bare `Handle`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(transparent)]
pub(crate) struct Handle(NonZero<RawIndex>);

impl Handle {
    pub(crate) const MAX: usize = (RawIndex::MAX - 1) as usize;

    #[inline]
    pub(crate) const fn from_index(index: usize) -> Self {
        assert!(index <= Self::MAX, "`Handle::from_index()` - `index` > `Handle::MAX`!");
        #[allow(clippy::cast_possible_truncation)]
        let raw = (index + 1) as RawIndex;
        match NonZero::new(raw) {
            Some(raw) => Self(raw),
            None => unreachable!(),
        }
    }

    #[inline]
    pub(crate) const fn to_index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}
