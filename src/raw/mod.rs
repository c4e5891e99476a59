mod arena;
mod handle;
mod integrity;
mod iter;
mod node;
mod raw_tree_map;
mod search;
mod size;

pub(crate) use iter::RawIter;
pub(crate) use raw_tree_map::RawTreeMap;
