//! An unbalanced Binary Search Tree keyed by integer weight, where every node
//! owns an arbitrary payload.
//!
//! ## Weighted Binary Search Tree
//!
//! Each `Node` stores a `weight` (the ordering key) and a `payload` (whatever the
//! caller handed over at insertion). The usual BST invariants hold:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a smaller weight.
//! 2. For every `Node`, all the `Node`s in its right subtree have a greater weight.
//!
//! Weights are unique: inserting a weight that is already present is rejected
//! rather than overwriting the stored payload.
//!
//! There is no rebalancing. The shape of the tree is whatever the insertion order
//! makes it, so inserting ascending weights produces a tree as deep as it is
//! large. For that reason no operation recurses on the height of the tree: every
//! walk (including `Drop`) uses an explicit stack or queue.
//!
//! Payloads are owned by the tree. Removing a weight, clearing the tree, or
//! dropping it releases the payloads it held.
//!
//! # Examples
//!
//! ```
//! use weighted_tree::{TreeError, WeightedTree};
//!
//! let mut tree = WeightedTree::new();
//! for (weight, name) in [(10, "P0"), (5, "P1"), (15, "P2"), (1, "P3"), (20, "P4")] {
//!     tree.insert(weight, name).unwrap();
//! }
//!
//! let pre_order: Vec<_> = tree.depth_first().map(|n| n.weight()).collect();
//! assert_eq!(pre_order, [10, 5, 1, 15, 20]);
//!
//! let level_order: Vec<_> = tree.breadth_first().map(|n| n.weight()).collect();
//! assert_eq!(level_order, [10, 5, 15, 1, 20]);
//!
//! assert_eq!(tree.insert(5, "again"), Err(TreeError::DuplicateKey(5)));
//!
//! tree.remove(10).unwrap();
//! let found = tree.find(&"P3", |probe, payload| probe == payload).unwrap();
//! assert_eq!(found.weight(), 1);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod traverse;
pub mod weighted;

pub use error::{Result, TreeError};
pub use weighted::{Node, WeightedTree};

/// The ordering key of a node.
pub type Weight = i32;
