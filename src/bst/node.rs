use crate::bst::tree::Tree;
use crate::key::Key;

/// A struct representing an internal node of a binary search tree.
pub struct Node {
    pub key: Key,
    pub left: Tree,
    pub right: Tree,
}

impl Node {
    pub fn new(key: Key) -> Self {
        Node {
            key,
            left: None,
            right: None,
        }
    }
}
