use std::ptr;
use std::iter::FusedIterator;

use super::Node;

/// Iterator over the values of a tree in post-order (left subtree, right subtree, node)
///
/// Created by [`BinarySearchTree::iter_postorder`](super::BinarySearchTree::iter_postorder).
#[derive(Debug, Clone)]
pub struct IterPostorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

// See: https://www.geeksforgeeks.org/iterative-postorder-traversal-using-stack/
impl<'a, T> IterPostorder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {stack: Vec::new()};
        if let Some(root) = root {
            iter.descend(root);
        }
        iter
    }

    /// Walks down the left spine from `node`, pushing each right child below its parent
    fn descend(&mut self, mut node: &'a Node<T>) {
        loop {
            self.stack.extend(node.right());
            self.stack.push(node);

            match node.left() {
                Some(left) => node = left,
                None => break,
            }
        }
    }
}

/// Compares two nodes for equality using pointer equality only
fn node_eq<T>(left: Option<&&Node<T>>, right: &Node<T>) -> bool {
    left.map(|&left| ptr::eq(left, right))
        // default to not equal
        .unwrap_or(false)
}

impl<'a, T> Iterator for IterPostorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match node.right() {
                // The right subtree has not been visited yet
                Some(right) if node_eq(self.stack.last(), right) => {
                    self.stack.pop();
                    self.stack.push(node);
                    self.descend(right);
                },

                _ => return Some(node.value()),
            }
        }

        None
    }
}

impl<'a, T> FusedIterator for IterPostorder<'a, T> {}
