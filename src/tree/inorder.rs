use std::iter::FusedIterator;

use super::Node;

/// Iterator over the values of a tree in ascending order (left subtree, node, right subtree)
///
/// Created by [`BinarySearchTree::iter_inorder`](super::BinarySearchTree::iter_inorder).
#[derive(Debug, Clone)]
pub struct IterInorder<'a, T> {
    stack: Vec<&'a Node<T>>,
}

// See: https://www.geeksforgeeks.org/inorder-tree-traversal-without-recursion/
impl<'a, T> IterInorder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {stack: Vec::new()};
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node<T>>) {
        while let Some(current_node) = current {
            self.stack.push(current_node);
            current = current_node.left();
        }
    }
}

impl<'a, T> Iterator for IterInorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl<'a, T> FusedIterator for IterInorder<'a, T> {}
