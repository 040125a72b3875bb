//! Implementation of an interval tree ([`interval_tree::IntervalTree`]) of closed
//! ranges, answering whether a queried range is *covered* by the union of the
//! stored ranges. It is an augmented binary search tree in the style of the
//! one described in Cormen et al. (2009, Section 14.3: Interval trees,
//! pp. 348–354): nodes are ordered by range, and each node caches the
//! largest range end in its subtree so that overlap searches can prune.
//!
//! Besides coverage queries, ranges can be inserted, removed and looked up
//! exactly, and the ranges overlapping a query can be iterated in order.
//!
//! Note that any type satisfying the [`Ord`] and [`Clone`] traits can be
//! stored in this tree.

mod error;
/// An interval tree implemented with a binary search tree.
pub mod interval_tree;
mod iterators;
mod node;
mod range;

pub use error::InvalidRangeError;
pub use interval_tree::IntervalTree;
pub use iterators::{Iter, Overlapping};
pub use node::Node;
pub use range::{range, Range};
