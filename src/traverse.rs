//! Borrowing traversals over a [`WeightedTree`][crate::WeightedTree].
//!
//! Each traversal keeps its own explicit stack or queue so walking a degenerate
//! (list shaped) tree costs heap, not call stack.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::Node;

/// Pre-order traversal: a node, then its left subtree, then its right subtree.
///
/// Created by [`WeightedTree::depth_first`][crate::WeightedTree::depth_first].
pub struct DepthFirst<'a, V> {
    stack: Vec<&'a Node<V>>,
    remaining: usize,
}

impl<'a, V> DepthFirst<'a, V> {
    pub(crate) fn new(root: Option<&'a Node<V>>, size: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: size,
        }
    }
}

impl<'a, V> Iterator for DepthFirst<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes in first so the left subtree is popped before it.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for DepthFirst<'_, V> {}
impl<V> FusedIterator for DepthFirst<'_, V> {}

/// Level-order traversal: the root, then every node one level down from left to
/// right, and so on.
///
/// Created by [`WeightedTree::breadth_first`][crate::WeightedTree::breadth_first].
pub struct BreadthFirst<'a, V> {
    queue: VecDeque<&'a Node<V>>,
    remaining: usize,
}

impl<'a, V> BreadthFirst<'a, V> {
    pub(crate) fn new(root: Option<&'a Node<V>>, size: usize) -> Self {
        // The queue never holds more than the whole tree.
        let mut queue = VecDeque::with_capacity(size);
        queue.extend(root);
        Self {
            queue,
            remaining: size,
        }
    }
}

impl<'a, V> Iterator for BreadthFirst<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for BreadthFirst<'_, V> {}
impl<V> FusedIterator for BreadthFirst<'_, V> {}

/// In-order traversal, which visits nodes in ascending weight.
///
/// Created by [`WeightedTree::iter`][crate::WeightedTree::iter].
pub struct InOrder<'a, V> {
    /// The left spine still to be visited. The top of the stack is the smallest
    /// weight not yet yielded.
    stack: Vec<&'a Node<V>>,
    remaining: usize,
}

impl<'a, V> InOrder<'a, V> {
    pub(crate) fn new(root: Option<&'a Node<V>>, size: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: size,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, V> Iterator for InOrder<'a, V> {
    type Item = &'a Node<V>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for InOrder<'_, V> {}
impl<V> FusedIterator for InOrder<'_, V> {}
