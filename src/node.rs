use crate::range::Range;
#[cfg(feature = "serde")]
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A node of an [`IntervalTree`](crate::interval_tree::IntervalTree).
///
/// Besides its own range, every node caches `max`, the greatest `end`
/// among its range and all ranges below it.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Node<K> {
    pub(crate) key: Range<K>,
    pub(crate) max: K,
    pub(crate) left: Option<Box<Node<K>>>,
    pub(crate) right: Option<Box<Node<K>>>,
}

impl<K: fmt::Display> fmt::Display for Node<K> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.key, self.max)
    }
}

impl<K> Node<K> {
    pub(crate) fn new(key: Range<K>) -> Node<K>
    where
        K: Clone,
    {
        let max = key.end.clone();

        Node {
            key,
            max,
            left: None,
            right: None,
        }
    }

    /// The range held by this node.
    pub fn range(&self) -> &Range<K> {
        &self.key
    }

    /// The greatest range end in the subtree rooted at this node.
    pub fn max(&self) -> &K {
        &self.max
    }

    pub fn left(&self) -> Option<&Node<K>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = &Node<K>> {
        self.left().into_iter().chain(self.right())
    }
}

impl<K: Ord + Clone> Node<K> {
    fn raise_max(&mut self, inserted_max: &K) {
        if *inserted_max > self.max {
            self.max.clone_from(inserted_max);
        }
    }

    /// Re-derives `max` from the node's own range and its children.
    /// Both children must already hold up to date values.
    fn update_max(&mut self) {
        self.max.clone_from(&self.key.end);
        if let Some(ref left) = self.left {
            if left.max > self.max {
                self.max.clone_from(&left.max);
            }
        }
        if let Some(ref right) = self.right {
            if right.max > self.max {
                self.max.clone_from(&right.max);
            }
        }
    }

    /// Inserts `key` below this node. Returns false if an equal range is
    /// already stored.
    pub(crate) fn insert(&mut self, key: Range<K>) -> bool {
        // The new node ends up somewhere below, so every node on the path
        // has to account for its end.
        self.raise_max(&key.end);

        let succ = match key.cmp(&self.key) {
            Ordering::Equal => return false,
            Ordering::Less => &mut self.left,
            Ordering::Greater => &mut self.right,
        };
        match succ {
            Some(node) => node.insert(key),
            None => {
                *succ = Some(Box::new(Node::new(key)));
                true
            }
        }
    }

    pub(crate) fn search(&self, key: &Range<K>) -> bool {
        let mut node = self;
        loop {
            let succ = match key.cmp(&node.key) {
                Ordering::Equal => return true,
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
            };
            match succ {
                Some(succ) => node = succ,
                None => return false,
            }
        }
    }

    /// Removes `key` from the subtree rooted at this node. Returns the new
    /// root of the subtree (`None` if it became empty) and whether a node
    /// was removed.
    pub(crate) fn remove(mut self: Box<Self>, key: &Range<K>) -> (Option<Box<Self>>, bool) {
        let succ = match key.cmp(&self.key) {
            Ordering::Equal => return (self.remove_root(), true),
            Ordering::Less => &mut self.left,
            Ordering::Greater => &mut self.right,
        };
        let removed = match succ.take() {
            Some(node) => {
                let (node, removed) = node.remove(key);
                *succ = node;
                removed
            }
            None => false,
        };
        // The removed range may have been the only one carrying our max.
        if removed {
            self.update_max();
        }
        (Some(self), removed)
    }

    fn remove_root(mut self: Box<Self>) -> Option<Box<Self>> {
        match (self.left.take(), self.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let (right, successor) = right.take_min();
                self.key = successor.key;
                self.left = Some(left);
                self.right = right;
                self.update_max();
                Some(self)
            }
        }
    }

    /// Detaches the minimal node of this subtree. Returns the remaining
    /// subtree and the detached node.
    fn take_min(mut self: Box<Self>) -> (Option<Box<Self>>, Box<Self>) {
        match self.left.take() {
            Some(left) => {
                let (left, min) = left.take_min();
                self.left = left;
                self.update_max();
                (Some(self), min)
            }
            None => (self.right.take(), self),
        }
    }
}
