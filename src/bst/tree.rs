use crate::bst::node::Node;
use crate::key::Key;
use std::cmp::Ordering;

pub type Tree = Option<Box<Node>>;

// Returns the empty slot where `key` belongs, or `None` if `key` is already in the tree.
pub fn vacant_slot<'a>(tree: &'a mut Tree, key: &str) -> Option<&'a mut Tree> {
    let mut curr = tree;
    loop {
        match { curr } {
            Some(node) => {
                curr = match key.cmp(node.key.as_str()) {
                    Ordering::Less => &mut node.left,
                    Ordering::Greater => &mut node.right,
                    Ordering::Equal => return None,
                };
            },
            slot => return Some(slot),
        }
    }
}

pub fn contains(tree: &Tree, key: &str) -> bool {
    let mut curr = tree;
    while let Some(ref node) = curr {
        curr = match key.cmp(node.key.as_str()) {
            Ordering::Less => &node.left,
            Ordering::Greater => &node.right,
            Ordering::Equal => return true,
        };
    }
    false
}

pub fn min(tree: &Tree) -> Option<&Key> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref left_node) = curr.left {
            curr = left_node;
        }
        &curr.key
    })
}

pub fn max(tree: &Tree) -> Option<&Key> {
    tree.as_ref().map(|node| {
        let mut curr = node;
        while let Some(ref right_node) = curr.right {
            curr = right_node;
        }
        &curr.key
    })
}

pub fn height(tree: &Tree) -> usize {
    let mut ret = 0;
    let mut stack = Vec::new();
    if let Some(ref node) = tree {
        stack.push((node, 1));
    }
    while let Some((node, depth)) = stack.pop() {
        if depth > ret {
            ret = depth;
        }
        if let Some(ref left) = node.left {
            stack.push((left, depth + 1));
        }
        if let Some(ref right) = node.right {
            stack.push((right, depth + 1));
        }
    }
    ret
}

// Releases every node of the tree in post-order and returns the number of released nodes. The
// children of a node are detached before they are visited so dropping a node never recurses.
pub fn destroy(tree: Tree) -> usize {
    let mut released = 0;
    let mut stack = Vec::new();
    if let Some(node) = tree {
        stack.push((node, false));
    }
    while let Some((mut node, expanded)) = stack.pop() {
        if expanded {
            released += 1;
            continue;
        }
        let left = node.left.take();
        let right = node.right.take();
        stack.push((node, true));
        if let Some(right) = right {
            stack.push((right, false));
        }
        if let Some(left) = left {
            stack.push((left, false));
        }
    }
    released
}
