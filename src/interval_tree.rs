use crate::error::InvalidRangeError;
use crate::iterators::{Iter, Overlapping};
use crate::node::Node;
use crate::range::Range;
#[cfg(feature = "serde")]
use serde::Serialize;
use std::fmt;

/// An interval tree of closed ranges.
///
/// Ranges are kept in a binary search tree ordered by `(start, end)`, and
/// each node caches the greatest `end` found in its subtree, which lets
/// queries skip every subtree ending before the queried range starts.
///
/// The tree does not rebalance itself: inserting ranges in sorted order
/// degrades it to a list. Insertion and removal recurse once per level.
///
/// # Examples
/// ```
/// use range_tree::{range, IntervalTree};
///
/// let mut tree = IntervalTree::new();
/// assert_eq!(tree.insert(range(5, 10)), Ok(true));
/// assert_eq!(tree.insert(range(1, 7)), Ok(true));
/// assert_eq!(tree.insert(range(9, 12)), Ok(true));
///
/// // No single range covers 1..=12, but their union does.
/// assert_eq!(tree.covers(&range(1, 12)), Ok(true));
/// assert_eq!(tree.covers(&range(0, 12)), Ok(false));
///
/// assert_eq!(tree.to_string(), "[(1, 7), 7][(5, 10), 12][(9, 12), 12]");
/// ```
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalTree<K> {
    root: Option<Box<Node<K>>>,
    size: usize,
}

impl<K> Default for IntervalTree<K> {
    fn default() -> Self {
        IntervalTree {
            root: None,
            size: 0,
        }
    }
}

impl<K> IntervalTree<K> {
    /// Constructs an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of ranges stored in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every range from the tree.
    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
    }

    /// The root node, for inspecting the shape of the tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// Returns the number of nodes on the longest path from the root to a
    /// leaf. An empty tree has height 0.
    ///
    /// ```
    /// use range_tree::{range, IntervalTree};
    ///
    /// let mut tree = IntervalTree::new();
    /// assert_eq!(tree.height(), 0);
    /// for i in 0..4 {
    ///     tree.insert(range(i, i + 1)).unwrap();
    /// }
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.children().map(|succ| (succ, depth + 1)));
        }
        height
    }

    /// Returns an iterator over every stored range, in ascending order.
    ///
    /// ```
    /// use range_tree::{range, IntervalTree};
    ///
    /// let mut tree = IntervalTree::new();
    /// tree.insert(range(4, 6)).unwrap();
    /// tree.insert(range(1, 9)).unwrap();
    /// let ranges: Vec<_> = tree.iter().collect();
    /// assert_eq!(ranges, vec![&range(1, 9), &range(4, 6)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root())
    }
}

impl<K: Ord + Clone> IntervalTree<K> {
    /// Adds `key` to the tree.
    ///
    /// Returns `Ok(true)` if a new node was created, or `Ok(false)` if an
    /// equal range was already stored.
    pub fn insert(&mut self, key: Range<K>) -> Result<bool, InvalidRangeError> {
        validate(&key)?;

        let inserted = match self.root.as_mut() {
            Some(root) => root.insert(key),
            None => {
                self.root = Some(Box::new(Node::new(key)));
                true
            }
        };
        if inserted {
            self.size += 1;
            log::trace!("inserted range, tree holds {} ranges", self.size);
        } else {
            log::trace!("range already present, nothing inserted");
        }
        Ok(inserted)
    }

    /// Removes the range equal to `key` from the tree.
    ///
    /// Returns `Ok(true)` if a node was removed, or `Ok(false)` if no equal
    /// range was stored.
    ///
    /// ```
    /// use range_tree::{range, IntervalTree};
    ///
    /// let mut tree = IntervalTree::new();
    /// tree.insert(range(2, 3)).unwrap();
    /// assert_eq!(tree.remove(&range(2, 3)), Ok(true));
    /// assert_eq!(tree.remove(&range(2, 3)), Ok(false));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, key: &Range<K>) -> Result<bool, InvalidRangeError> {
        validate(key)?;

        let removed = match self.root.take() {
            Some(root) => {
                let (root, removed) = root.remove(key);
                self.root = root;
                removed
            }
            None => false,
        };
        if removed {
            self.size -= 1;
            log::trace!("removed range, tree holds {} ranges", self.size);
        } else {
            log::trace!("range not found, nothing removed");
        }
        Ok(removed)
    }

    /// Returns `Ok(true)` if a range equal to `key` is stored in the tree.
    pub fn contains(&self, key: &Range<K>) -> Result<bool, InvalidRangeError> {
        validate(key)?;
        Ok(self.root().map_or(false, |root| root.search(key)))
    }

    /// Returns an iterator over the stored ranges overlapping `target`, in
    /// ascending order.
    ///
    /// ```
    /// use range_tree::{range, IntervalTree};
    ///
    /// let mut tree = IntervalTree::new();
    /// for r in [range(1, 3), range(5, 8), range(7, 10), range(12, 15)] {
    ///     tree.insert(r).unwrap();
    /// }
    /// let found: Vec<_> = tree.overlapping(&range(8, 12)).unwrap().collect();
    /// assert_eq!(found, vec![&range(5, 8), &range(7, 10), &range(12, 15)]);
    /// ```
    pub fn overlapping(&self, target: &Range<K>) -> Result<Overlapping<'_, K>, InvalidRangeError> {
        validate(target)?;
        Ok(Overlapping::new(self.root(), target.clone()))
    }

    /// Returns `Ok(true)` if `target` lies within the union of the stored
    /// ranges, even when no single stored range contains it.
    ///
    /// Overlapping ranges are merged in ascending order of start; ranges
    /// that only touch at an endpoint overlap, ranges separated by any gap
    /// do not.
    ///
    /// ```
    /// use range_tree::{range, IntervalTree};
    ///
    /// let mut tree = IntervalTree::new();
    /// tree.insert(range(16, 20)).unwrap();
    /// tree.insert(range(10, 14)).unwrap();
    /// assert_eq!(tree.covers(&range(16, 19)), Ok(true));
    /// assert_eq!(tree.covers(&range(10, 20)), Ok(false));
    /// ```
    pub fn covers(&self, target: &Range<K>) -> Result<bool, InvalidRangeError> {
        let mut merged: Option<Range<K>> = None;
        for next in self.overlapping(target)? {
            let current = match merged.take() {
                Some(current) if current.overlaps(next) => current.merge(next),
                // Sorted by start, so a range not reaching `next` cannot
                // reach anything after it either.
                _ => next.clone(),
            };
            if current.start > target.end {
                break;
            }
            if current.contains(target) {
                log::trace!("query range is covered");
                return Ok(true);
            }
            merged = Some(current);
        }
        log::trace!("query range is not covered");
        Ok(false)
    }
}

fn validate<K: Ord>(key: &Range<K>) -> Result<(), InvalidRangeError> {
    key.validate().map_err(|err| {
        log::debug!("rejected range: {err}");
        err
    })
}

/// Renders every node in order as `[(start, end), max]`, without
/// separators. An empty tree renders as an empty string.
impl<K: fmt::Display> fmt::Display for IntervalTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut nodes = Iter::new(self.root());
        while let Some(node) = nodes.next_node() {
            write!(f, "{}", node)?;
        }
        Ok(())
    }
}

impl<'a, K> IntoIterator for &'a IntervalTree<K> {
    type Item = &'a Range<K>;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
