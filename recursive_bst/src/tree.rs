use std::borrow::Borrow;
use std::cmp::Ordering;
use std::iter::FromIterator;

type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}

/// A binary search tree that uses recursion for every operation
///
/// Values less than a node go left, everything else (including duplicates) goes right.
#[derive(Debug, Clone)]
pub struct RecursiveBST<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for RecursiveBST<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T: Ord> RecursiveBST<T> {
    /// Creates an empty `RecursiveBST`
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values in the tree
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts a value into the tree
    pub fn insert(&mut self, value: T) {
        insert_node(&mut self.root, Node::new(value));
        self.len += 1;
    }

    /// Returns `true` if the tree contains the specified value
    pub fn search<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        search_node(self.root.as_deref(), value)
    }

    /// Returns the smallest value in the tree
    pub fn min_value(&self) -> Option<&T> {
        fn leftmost<T>(node: &Node<T>) -> &T {
            match node.left.as_deref() {
                Some(left) => leftmost(left),
                None => &node.value,
            }
        }

        self.root.as_deref().map(leftmost)
    }

    /// Returns the largest value in the tree
    pub fn max_value(&self) -> Option<&T> {
        fn rightmost<T>(node: &Node<T>) -> &T {
            match node.right.as_deref() {
                Some(right) => rightmost(right),
                None => &node.value,
            }
        }

        self.root.as_deref().map(rightmost)
    }

    /// Removes one instance of a value from the tree. Returns whether the value was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let removed = remove_node(&mut self.root, value).is_some();
        if removed {
            self.len -= 1;
        }

        removed
    }

    /// Clears the tree, removing all values
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Visits each node, then its left subtree, then its right subtree
    pub fn pre_order_traverse<F: FnMut(&T)>(&self, mut visit: F) {
        fn walk<T, F: FnMut(&T)>(node: Option<&Node<T>>, visit: &mut F) {
            if let Some(node) = node {
                visit(&node.value);
                walk(node.left.as_deref(), visit);
                walk(node.right.as_deref(), visit);
            }
        }

        walk(self.root.as_deref(), &mut visit);
    }

    /// Visits the left subtree, then each node, then its right subtree (i.e. ascending order)
    pub fn in_order_traverse<F: FnMut(&T)>(&self, mut visit: F) {
        fn walk<T, F: FnMut(&T)>(node: Option<&Node<T>>, visit: &mut F) {
            if let Some(node) = node {
                walk(node.left.as_deref(), visit);
                visit(&node.value);
                walk(node.right.as_deref(), visit);
            }
        }

        walk(self.root.as_deref(), &mut visit);
    }

    /// Visits the left subtree, then the right subtree, then each node
    pub fn post_order_traverse<F: FnMut(&T)>(&self, mut visit: F) {
        fn walk<T, F: FnMut(&T)>(node: Option<&Node<T>>, visit: &mut F) {
            if let Some(node) = node {
                walk(node.left.as_deref(), visit);
                walk(node.right.as_deref(), visit);
                visit(&node.value);
            }
        }

        walk(self.root.as_deref(), &mut visit);
    }
}

fn insert_node<T: Ord>(link: &mut Link<T>, new_node: Node<T>) {
    match link {
        None => *link = Some(Box::new(new_node)),
        Some(node) => if new_node.value < node.value {
            insert_node(&mut node.left, new_node)
        } else {
            insert_node(&mut node.right, new_node)
        },
    }
}

fn search_node<T, Q>(node: Option<&Node<T>>, value: &Q) -> bool
    where T: Borrow<Q>,
          Q: Ord + ?Sized,
{
    match node {
        None => false,
        Some(node) => match value.cmp(node.value.borrow()) {
            Ordering::Less => search_node(node.left.as_deref(), value),
            Ordering::Greater => search_node(node.right.as_deref(), value),
            Ordering::Equal => true,
        },
    }
}

fn remove_node<T, Q>(link: &mut Link<T>, value: &Q) -> Option<T>
    where T: Borrow<Q>,
          Q: Ord + ?Sized,
{
    let node = link.as_mut()?;
    match value.cmp(node.value.borrow()) {
        Ordering::Less => remove_node(&mut node.left, value),
        Ordering::Greater => remove_node(&mut node.right, value),
        Ordering::Equal => {
            let mut node = link.take()?;
            *link = match (node.left.take(), node.right.take()) {
                (left, None) => left,
                (None, right) => right,
                (Some(left), Some(mut right)) => {
                    let mut successor = match remove_min(&mut right.left) {
                        Some(mut successor) => {
                            successor.right = Some(right);
                            successor
                        },
                        None => right,
                    };
                    successor.left = Some(left);
                    Some(successor)
                },
            };

            Some(node.value)
        },
    }
}

/// Detaches the smallest node of the given subtree, putting its right subtree in its place
fn remove_min<T>(link: &mut Link<T>) -> Option<Box<Node<T>>> {
    if link.as_ref()?.left.is_some() {
        return remove_min(&mut link.as_mut()?.left);
    }

    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}

impl<T: Ord> Extend<T> for RecursiveBST<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for RecursiveBST<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
