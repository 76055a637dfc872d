use std::collections::VecDeque;
use std::iter::FusedIterator;

use super::Node;

/// Iterator over the values of a tree one level at a time, from the root down and left to right
///
/// Created by [`BinarySearchTree::iter_level_order`](super::BinarySearchTree::iter_level_order).
#[derive(Debug, Clone)]
pub struct IterLevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> IterLevelOrder<'a, T> {
    pub(super) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            queue: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for IterLevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left());
        self.queue.extend(node.right());
        Some(node.value())
    }
}

impl<'a, T> FusedIterator for IterLevelOrder<'a, T> {}
