//! The weighted BST itself. Nodes live in `Box`es owned by their parent, so the
//! tree is a plain ownership tree with no parent pointers and no `unsafe`.
//!
//! # Examples
//!
//! ```
//! use weighted_tree::WeightedTree;
//!
//! let mut tree = WeightedTree::new();
//! assert_eq!(tree.insert(2, "two"), Ok(1));
//! assert_eq!(tree.insert(1, "one"), Ok(2));
//!
//! // Removing a weight releases the payload stored under it.
//! tree.remove(2).unwrap();
//! assert_eq!(tree.get(2), None);
//! assert_eq!(tree.get(1), Some(&"one"));
//! assert_eq!(tree.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::error::{Result, TreeError};
use crate::traverse::{BreadthFirst, DepthFirst, InOrder};
use crate::Weight;

type Link<V> = Option<Box<Node<V>>>;

/// Which child of a node an operation moves into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// An unbalanced Binary Search Tree mapping unique weights to owned payloads.
pub struct WeightedTree<V> {
    root: Link<V>,
    /// Number of nodes reachable from `root`.
    size: usize,
}

impl<V> Default for WeightedTree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Drop for WeightedTree<V> {
    fn drop(&mut self) {
        release(&mut self.root);
    }
}

impl<V> WeightedTree<V> {
    /// Generates a new, empty `WeightedTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<V>> {
        self.root.as_deref()
    }

    /// The number of levels on the longest path from the root to a leaf. An empty
    /// tree has a height of 0 and a lone root a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<V>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level
                .iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }
        height
    }

    /// Inserts `payload` under `weight` and returns the new number of nodes.
    ///
    /// The tree takes ownership of the payload. If a node with the same weight
    /// already exists the tree is left as it was, the payload is dropped, and
    /// [`TreeError::DuplicateKey`] is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_tree::{TreeError, WeightedTree};
    ///
    /// let mut tree = WeightedTree::new();
    ///
    /// assert_eq!(tree.insert(7, 'a'), Ok(1));
    /// assert_eq!(tree.insert(3, 'b'), Ok(2));
    /// assert_eq!(tree.insert(7, 'c'), Err(TreeError::DuplicateKey(7)));
    /// assert_eq!(tree.get(7), Some(&'a'));
    /// ```
    pub fn insert(&mut self, weight: Weight, payload: V) -> Result<usize> {
        let mut slot = &mut self.root;
        while let Some(ordering) = slot.as_deref().map(|node| weight.cmp(&node.weight)) {
            let side = match ordering {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    debug!(weight, "insert rejected, weight already present");
                    return Err(TreeError::DuplicateKey(weight));
                }
            };
            if let Some(node) = slot {
                slot = node.child_mut(side);
            }
        }

        *slot = Some(Node::new_boxed(weight, payload));
        self.size += 1;
        trace!(weight, size = self.size, "inserted");
        Ok(self.size)
    }

    /// Removes the node holding `weight` and drops its payload.
    ///
    /// Rather than relinking nodes, the removed entry is pushed down the tree: the
    /// node trades its weight and payload with its in-order successor (or, with no
    /// right subtree, its predecessor) and the same happens again from there, until
    /// the entry sits in a leaf, which is then cut off. The successor is always
    /// preferred.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_tree::{TreeError, WeightedTree};
    ///
    /// let mut tree = WeightedTree::new();
    /// for weight in [10, 5, 15, 1, 20] {
    ///     tree.insert(weight, weight * 100).unwrap();
    /// }
    ///
    /// tree.remove(10).unwrap();
    ///
    /// // The in-order successor, 15, was promoted into the old root.
    /// assert_eq!(tree.root().map(|n| n.weight()), Some(15));
    /// assert_eq!(tree.remove(10), Err(TreeError::NotFound));
    /// ```
    pub fn remove(&mut self, weight: Weight) -> Result<()> {
        let mut slot = &mut self.root;
        loop {
            let ordering = match slot.as_deref() {
                Some(node) => weight.cmp(&node.weight),
                None => {
                    debug!(weight, "remove missed");
                    return Err(TreeError::NotFound);
                }
            };
            let side = match ordering {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => break,
            };
            if let Some(node) = slot {
                slot = node.child_mut(side);
            }
        }

        while let Some(side) = slot.as_deref().and_then(Node::donor) {
            if let Some(node) = slot {
                slot = node.promote(side);
            }
        }

        // `slot` now holds the leaf carrying the removed entry.
        *slot = None;
        self.size -= 1;
        trace!(weight, size = self.size, "removed");
        Ok(())
    }

    /// Returns a reference to the payload stored under `weight`, walking the tree
    /// by weight.
    pub fn get(&self, weight: Weight) -> Option<&V> {
        let mut node = self.root();
        while let Some(n) = node {
            node = match weight.cmp(&n.weight) {
                Ordering::Less => n.left(),
                Ordering::Equal => return Some(&n.payload),
                Ordering::Greater => n.right(),
            };
        }
        None
    }

    /// Returns a mutable reference to the payload stored under `weight`. Weights
    /// themselves cannot be changed in place.
    pub fn get_mut(&mut self, weight: Weight) -> Option<&mut V> {
        let mut node = self.root.as_deref_mut();
        while let Some(n) = node {
            node = match weight.cmp(&n.weight) {
                Ordering::Less => n.left.as_deref_mut(),
                Ordering::Equal => return Some(&mut n.payload),
                Ordering::Greater => n.right.as_deref_mut(),
            };
        }
        None
    }

    /// Whether a node with `weight` exists.
    pub fn contains(&self, weight: Weight) -> bool {
        self.get(weight).is_some()
    }

    /// Finds the first node, in pre-order, whose payload `matches` the `probe`.
    ///
    /// This compares payloads, not weights, so it visits every node until a match
    /// turns up. The returned node still belongs to the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use weighted_tree::{TreeError, WeightedTree};
    ///
    /// let mut tree = WeightedTree::new();
    /// tree.insert(4, String::from("abc... 4")).unwrap();
    /// tree.insert(2, String::from("abc... 2")).unwrap();
    ///
    /// let same_tail = |probe: &str, payload: &String| payload.ends_with(probe);
    ///
    /// assert_eq!(tree.find("2", same_tail).map(|n| n.weight()), Ok(2));
    /// assert_eq!(tree.find("9", same_tail).map(|n| n.weight()), Err(TreeError::NotFound));
    /// ```
    pub fn find<P, F>(&self, probe: &P, mut matches: F) -> Result<&Node<V>>
    where
        P: ?Sized,
        F: FnMut(&P, &V) -> bool,
    {
        self.depth_first()
            .find(|node| matches(probe, &node.payload))
            .ok_or(TreeError::NotFound)
    }

    /// Fills `buffer` with the nodes in pre-order (node, left subtree, right
    /// subtree). Entries past [`len`][Self::len] are left alone.
    ///
    /// Fails with [`TreeError::CapacityTooSmall`] without writing anything when
    /// `buffer` is shorter than the tree.
    pub fn collect_depth_first<'a>(
        &'a self,
        buffer: &mut [Option<&'a Node<V>>],
    ) -> Result<()> {
        self.check_capacity(buffer.len())?;
        for (entry, node) in buffer.iter_mut().zip(self.depth_first()) {
            *entry = Some(node);
        }
        Ok(())
    }

    /// Fills `buffer` with the nodes in level order (root, then each level from
    /// left to right). Entries past [`len`][Self::len] are left alone.
    ///
    /// Fails with [`TreeError::CapacityTooSmall`] without writing anything when
    /// `buffer` is shorter than the tree.
    pub fn collect_breadth_first<'a>(
        &'a self,
        buffer: &mut [Option<&'a Node<V>>],
    ) -> Result<()> {
        self.check_capacity(buffer.len())?;
        for (entry, node) in buffer.iter_mut().zip(self.breadth_first()) {
            *entry = Some(node);
        }
        Ok(())
    }

    /// Iterates over the nodes in pre-order.
    pub fn depth_first(&self) -> DepthFirst<'_, V> {
        DepthFirst::new(self.root(), self.size)
    }

    /// Iterates over the nodes in level order.
    pub fn breadth_first(&self) -> BreadthFirst<'_, V> {
        BreadthFirst::new(self.root(), self.size)
    }

    /// Iterates over the nodes in ascending weight.
    pub fn iter(&self) -> InOrder<'_, V> {
        InOrder::new(self.root(), self.size)
    }

    /// Drops every node and payload, children before their parent. The tree stays
    /// usable and behaves like a new one afterwards.
    pub fn clear(&mut self) {
        let released = release(&mut self.root);
        self.size = 0;
        debug!(released, "cleared");
    }

    /// Consumes the tree, dropping every node and payload just as
    /// [`clear`][Self::clear] does.
    pub fn destroy(mut self) {
        let released = release(&mut self.root);
        self.size = 0;
        debug!(released, "destroyed");
    }

    /// Prints the [`Display`][fmt::Display] form of the tree and a newline to
    /// stdout.
    pub fn print(&self) {
        println!("{}", self);
    }

    fn check_capacity(&self, capacity: usize) -> Result<()> {
        if capacity < self.size {
            debug!(capacity, size = self.size, "traversal buffer too small");
            return Err(TreeError::CapacityTooSmall {
                capacity,
                size: self.size,
            });
        }
        Ok(())
    }
}

impl<'a, V> IntoIterator for &'a WeightedTree<V> {
    type Item = &'a Node<V>;
    type IntoIter = InOrder<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Piece of the bracketed rendering still waiting to be written.
enum Pending<'a, V> {
    Node(&'a Node<V>),
    Text(&'static str),
}

/// Renders the tree as nested `[ weight : left, right ] ` groups in pre-order.
/// Empty subtrees render as nothing. This is a debugging aid, not a stable
/// format.
impl<V> fmt::Display for WeightedTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut pending: Vec<Pending<'_, V>> =
            self.root().map(Pending::Node).into_iter().collect();
        while let Some(piece) = pending.pop() {
            match piece {
                Pending::Text(text) => f.write_str(text)?,
                Pending::Node(node) => {
                    write!(f, "[ {} : ", node.weight)?;
                    pending.push(Pending::Text(" ] "));
                    pending.extend(node.right().map(Pending::Node));
                    pending.push(Pending::Text(", "));
                    pending.extend(node.left().map(Pending::Node));
                }
            }
        }
        Ok(())
    }
}

impl<V> fmt::Debug for WeightedTree<V>
where
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|node| (node.weight, &node.payload)))
            .finish()
    }
}

/// Drops every node under `link`, children before parents and left before right,
/// and returns how many were dropped.
fn release<V>(link: &mut Link<V>) -> usize {
    let mut released = 0;
    let mut stack: Vec<Box<Node<V>>> = link.take().into_iter().collect();
    while let Some(top) = stack.last_mut() {
        if let Some(left) = top.left.take() {
            stack.push(left);
        } else if let Some(right) = top.right.take() {
            stack.push(right);
        } else {
            // Childless now, so dropping it only drops its payload.
            stack.pop();
            released += 1;
        }
    }
    released
}

/// A weight, its payload, and up to two children.
pub struct Node<V> {
    weight: Weight,
    payload: V,
    left: Link<V>,
    right: Link<V>,
}

impl<V> fmt::Debug for Node<V>
where
    V: fmt::Debug,
{
    // Children are left out so formatting a node never walks the subtree.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("weight", &self.weight)
            .field("payload", &self.payload)
            .finish()
    }
}

impl<V> Node<V> {
    fn new_boxed(weight: Weight, payload: V) -> Box<Self> {
        Box::new(Self {
            weight,
            payload,
            left: None,
            right: None,
        })
    }

    /// The weight this node is ordered by.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The payload stored with the weight.
    pub fn payload(&self) -> &V {
        &self.payload
    }

    /// The root of the left subtree, holding smaller weights.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The root of the right subtree, holding greater weights.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<V> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// The subtree that supplies this node's replacement on removal, right first.
    fn donor(&self) -> Option<Side> {
        if self.right.is_some() {
            Some(Side::Right)
        } else if self.left.is_some() {
            Some(Side::Left)
        } else {
            None
        }
    }

    fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// Trades weight and payload with this node's in-order neighbour inside the
    /// subtree on `side` and returns the neighbour's slot, which now holds the entry
    /// being removed.
    fn promote(&mut self, side: Side) -> &mut Link<V> {
        let Node {
            weight,
            payload,
            left,
            right,
        } = self;
        // The neighbour is the innermost node of the donor subtree.
        let (mut slot, inner) = match side {
            Side::Left => (left, Side::Right),
            Side::Right => (right, Side::Left),
        };
        while slot.as_deref().map_or(false, |n| n.child(inner).is_some()) {
            if let Some(n) = slot {
                slot = n.child_mut(inner);
            }
        }
        if let Some(neighbour) = slot.as_deref_mut() {
            mem::swap(weight, &mut neighbour.weight);
            mem::swap(payload, &mut neighbour.payload);
        }
        slot
    }
}
