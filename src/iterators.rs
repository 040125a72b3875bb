use crate::node::Node;
use crate::range::Range;

/// An in-order iterator over every range of an
/// [`IntervalTree`](crate::interval_tree::IntervalTree).
#[derive(Debug, Clone)]
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut iter = Iter { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K>>) {
        while let Some(succ) = node {
            self.stack.push(succ);
            node = succ.left();
        }
    }

    pub(crate) fn next_node(&mut self) -> Option<&'a Node<K>> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node)
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a Range<K>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(Node::range)
    }
}

#[derive(Debug, Clone, Copy)]
enum Visiting {
    Left,
    Center,
    Right,
}

/// An iterator over the stored ranges overlapping a target range, in
/// ascending order.
///
/// Subtrees whose cached `max` lies before the target's start are never
/// entered, and right subtrees are skipped once the target ends before the
/// node's start.
#[derive(Debug, Clone)]
pub struct Overlapping<'a, K> {
    target: Range<K>,
    stack: Vec<(&'a Node<K>, Visiting)>,
}

impl<'a, K: Ord> Overlapping<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, target: Range<K>) -> Self {
        let mut iter = Overlapping {
            target,
            stack: Vec::new(),
        };
        iter.enter(root);
        iter
    }

    fn enter(&mut self, node: Option<&'a Node<K>>) {
        match node {
            Some(node) if node.max >= self.target.start => self.stack.push((node, Visiting::Left)),
            _ => {}
        }
    }

    fn visit_left(&mut self, node: &'a Node<K>) {
        self.stack.push((node, Visiting::Center));
        self.enter(node.left());
    }

    fn visit_right(&mut self, node: &'a Node<K>) {
        if self.target.end >= node.key.start {
            self.enter(node.right());
        }
    }
}

impl<'a, K: Ord> Iterator for Overlapping<'a, K> {
    type Item = &'a Range<K>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, state)) = self.stack.pop() {
            match state {
                Visiting::Left => self.visit_left(node),
                Visiting::Right => self.visit_right(node),
                Visiting::Center => {
                    self.stack.push((node, Visiting::Right));
                    if node.key.overlaps(&self.target) {
                        return Some(&node.key);
                    }
                }
            }
        }
        None
    }
}
