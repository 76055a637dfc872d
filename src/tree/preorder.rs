use std::iter::FusedIterator;

use super::Node;

/// Iterator over the values of a tree in pre-order (node, left subtree, right subtree)
///
/// Created by [`BinarySearchTree::iter_preorder`](super::BinarySearchTree::iter_preorder).
#[derive(Debug, Clone)]
pub struct IterPreorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> IterPreorder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

// See: https://www.geeksforgeeks.org/iterative-preorder-traversal/
impl<'a, T> Iterator for IterPreorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right is pushed first so that the left subtree is visited first
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        Some(node.value())
    }
}

impl<'a, T> FusedIterator for IterPreorder<'a, T> {}
