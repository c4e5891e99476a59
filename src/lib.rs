//! An ordered symbol table for Rust.
//!
//! This crate provides [`OrderedTreeMap`], a key-value map that keeps its keys
//! sorted in a size-augmented binary search tree and answers order-statistic
//! queries alongside the usual map operations:
//!
//! - [`min`](OrderedTreeMap::min) / [`max`](OrderedTreeMap::max) - The extreme keys
//! - [`floor`](OrderedTreeMap::floor) / [`ceiling`](OrderedTreeMap::ceiling) - The nearest key at or below / at or above a probe
//! - [`rank`](OrderedTreeMap::rank) - The number of keys smaller than a probe
//! - [`select`](OrderedTreeMap::select) - The key at a given sorted position
//! - [`range_len`](OrderedTreeMap::range_len) / [`range_keys`](OrderedTreeMap::range_keys) - Inclusive range counts and listings
//! - Indexing by [`Rank`] - e.g., `map[Rank(0)]` for the value of the smallest key
//!
//! # Example
//!
//! ```
//! use ordered_tree_map::{OrderedTreeMap, Rank};
//!
//! let mut scores = OrderedTreeMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//!
//! // Keys are sorted alphabetically.
//! assert_eq!(scores.select(1), Some(&"Bob"));
//! assert_eq!(scores.rank(&"Carol"), 2);
//! assert_eq!(scores.floor(&"Bz"), Some(&"Bob"));
//! assert_eq!(scores[Rank(0)], 100);
//!
//! scores.delete_min();
//! assert_eq!(scores.min(), Some(&"Bob"));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`
//! - **`tracing`** (default) - Emits `trace` events for structural edits and
//!   `warn` events for failed [`check`](OrderedTreeMap::check)s
//!
//! # Implementation
//!
//! The tree is deliberately unbalanced: there are no rotations, so the cost of
//! every operation is proportional to the depth of the tree. Deletion uses
//! Hibbard's algorithm (a node with two children is replaced by its in-order
//! successor). Nodes live in an index arena and each node owns its two child
//! slots; every insert or delete is a recursive rewrite that returns the new
//! root of the subtree it edited, with cached subtree sizes recomputed on the
//! way back up.

#![cfg_attr(not(test), no_std)]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod error;
mod order_statistic;
mod raw;

pub mod ordered_tree_map;

pub use error::IntegrityError;
pub use order_statistic::Rank;
pub use ordered_tree_map::OrderedTreeMap;
