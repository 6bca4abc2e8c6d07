//! Unbalanced binary search tree where every key in the left subtree of a node compares less than
//! the key of the node and every key in the right subtree compares greater.

mod node;
mod set;
mod traversal;
mod tree;

pub use self::set::BstSet;
pub use self::traversal::{Order, Traversal};
