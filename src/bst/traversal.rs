use crate::bst::node::Node;
use crate::bst::tree::Tree;

/// The order in which a traversal visits the nodes of a `BstSet`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Order {
    /// Visits a node, then its left subtree, then its right subtree.
    PreOrder,
    /// Visits the left subtree, then the node, then the right subtree. Keys are yielded in
    /// ascending order.
    InOrder,
    /// Visits the left subtree, then the right subtree, then the node. Every node is yielded
    /// after all of its descendants.
    PostOrder,
}

/// An iterator over the keys of a `BstSet` in a particular `Order`.
///
/// The traversal keeps an explicit stack instead of recursing, so it is safe to use on
/// degenerate trees of any height.
pub struct Traversal<'a> {
    order: Order,
    current: Option<&'a Node>,
    stack: Vec<(&'a Node, bool)>,
}

impl<'a> Traversal<'a> {
    pub(crate) fn new(tree: &'a Tree, order: Order) -> Self {
        let mut stack = Vec::new();
        let mut current = None;
        match order {
            Order::InOrder => current = tree.as_deref(),
            Order::PreOrder | Order::PostOrder => {
                if let Some(node) = tree.as_deref() {
                    stack.push((node, false));
                }
            },
        }
        Traversal {
            order,
            current,
            stack,
        }
    }

    fn next_preorder(&mut self) -> Option<&'a str> {
        self.stack.pop().map(|(node, _)| {
            if let Some(ref right) = node.right {
                self.stack.push((&**right, false));
            }
            if let Some(ref left) = node.left {
                self.stack.push((&**left, false));
            }
            node.key.as_str()
        })
    }

    fn next_inorder(&mut self) -> Option<&'a str> {
        while let Some(node) = self.current {
            self.current = node.left.as_deref();
            self.stack.push((node, false));
        }
        self.stack.pop().map(|(node, _)| {
            self.current = node.right.as_deref();
            node.key.as_str()
        })
    }

    fn next_postorder(&mut self) -> Option<&'a str> {
        while let Some((node, expanded)) = self.stack.pop() {
            if expanded {
                return Some(node.key.as_str());
            }
            self.stack.push((node, true));
            if let Some(ref right) = node.right {
                self.stack.push((&**right, false));
            }
            if let Some(ref left) = node.left {
                self.stack.push((&**left, false));
            }
        }
        None
    }
}

impl<'a> Iterator for Traversal<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        match self.order {
            Order::PreOrder => self.next_preorder(),
            Order::InOrder => self.next_inorder(),
            Order::PostOrder => self.next_postorder(),
        }
    }
}
