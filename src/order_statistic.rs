/// A zero-based position in the sorted order of a map's keys.
///
/// Indexing an [`OrderedTreeMap`](crate::OrderedTreeMap) with a `Rank` yields
/// the value whose key is the `n`-th smallest.
///
/// # Examples
///
/// ```
/// use ordered_tree_map::{OrderedTreeMap, Rank};
///
/// let mut map = OrderedTreeMap::new();
/// map.insert("b", 20);
/// map.insert("a", 10);
///
/// assert_eq!(map[Rank(0)], 10);
/// assert_eq!(map[Rank(1)], 20);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
