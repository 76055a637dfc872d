//! The binary search tree, its nodes and its traversal iterators

mod node;
mod preorder;
mod inorder;
mod postorder;
mod level_order;
#[cfg(feature = "serde")]
mod serialize;

pub use node::Node;
pub use preorder::*;
pub use inorder::*;
pub use postorder::*;
pub use level_order::*;

use std::fmt;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::iter::FromIterator;

use node::Link;

/// An unbalanced binary search tree (BST)
///
/// BST properties: For each node with value `v`:
/// - The value of each node in the left subtree is less than `v`
/// - The value of each node in the right subtree is greater than or equal to `v`
///
/// Duplicate values are allowed. Inserting a value equal to one already in the tree adds another
/// node to the right of the existing one. Lookups and removals act on the first equal value met
/// while descending from the root, and each removal deletes exactly one instance.
///
/// No rebalancing is ever performed, so the shape of the tree depends entirely on insertion
/// order. Inserting values in sorted order produces a degenerate tree with one node per level.
/// Every operation (including `Drop`, `Clone` and `Debug`) is iterative, so degenerate trees are
/// slow but never exhaust the call stack.
pub struct BinarySearchTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T> Drop for BinarySearchTree<T> {
    fn drop(&mut self) {
        // The default drop glue of `Box` recurses once per level
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.take_left());
            stack.extend(node.take_right());
        }
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> Self {
        // Copies node by node, pairing each source node with the link its copy goes into
        let mut root = None;
        let mut stack: Vec<(&Node<T>, &mut Link<T>)> = Vec::new();
        if let Some(node) = self.root.as_deref() {
            stack.push((node, &mut root));
        }

        while let Some((source, link)) = stack.pop() {
            let copy = link.get_or_insert_with(|| Box::new(Node::new(source.value().clone())));
            let (left, right) = copy.children_mut();
            stack.extend(source.left().map(|node| (node, left)));
            stack.extend(source.right().map(|node| (node, right)));
        }

        Self {
            root,
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for BinarySearchTree<T>
    where T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(IterInorder::new(self.root.as_deref()))
            .finish()
    }
}

impl<T: Ord> PartialEq for BinarySearchTree<T> {
    fn eq(&self, other: &Self) -> bool {
        // Two trees may be shaped differently while holding the same values (e.g. if insertion
        // order is different). In-order traversal is sorted, so comparing it compares contents.
        self.len() == other.len() && self.iter_inorder().eq(other.iter_inorder())
    }
}

impl<T: Ord> Eq for BinarySearchTree<T> {}

impl<T: Ord> BinarySearchTree<T> {
    /// Creates an empty tree
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    /// let mut tree: BinarySearchTree<i32> = BinarySearchTree::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values in the tree (i.e. the number of nodes), counting duplicates
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert!(tree.is_empty());
    /// tree.insert(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        debug_assert!((self.len == 0) == self.root.is_none());
        self.len == 0
    }

    /// Returns the number of levels in the tree. The root is on level 1 and an empty tree has a
    /// height of 0.
    ///
    /// Time complexity: `O(n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let balanced: BinarySearchTree<_> = vec![2, 1, 3].into_iter().collect();
    /// assert_eq!(balanced.height(), 2);
    ///
    /// let degenerate: BinarySearchTree<_> = vec![1, 2, 3].into_iter().collect();
    /// assert_eq!(degenerate.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut level: Vec<&Node<T>> = self.root().into_iter().collect();
        while !level.is_empty() {
            height += 1;
            level = level.into_iter()
                .flat_map(|node| node.left().into_iter().chain(node.right()))
                .collect();
        }

        height
    }

    /// Inserts a value into the tree
    ///
    /// Values less than a node go into its left subtree. All other values, including values equal
    /// to the node, go into its right subtree.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(37);
    /// tree.insert(37);
    /// assert!(tree.search(&37));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) {
        let mut link = &mut self.root;
        while let Some(node) = link {
            link = if value < *node.value() {
                node.left_link()
            } else {
                node.right_link()
            };
        }

        *link = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Returns `true` if the tree contains the specified value
    ///
    /// The value may be any borrowed form of the tree's value type, but the ordering on the
    /// borrowed form must match the ordering on the value type.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(String::from("abc"));
    /// assert!(tree.search("abc"));
    /// assert!(!tree.search("def"));
    /// ```
    pub fn search<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.get(value).is_some()
    }

    /// Returns a reference to the first value in the tree equal to the given one, or `None` if
    /// there is no such value
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(1);
    /// assert_eq!(tree.get(&1), Some(&1));
    /// assert_eq!(tree.get(&2), None);
    /// ```
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match value.cmp(node.value().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(node.value()),
            }
        }

        None
    }

    /// Returns the smallest value in the tree, or `None` if the tree is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.min_value(), None);
    /// tree.extend(vec![5, 2, 9]);
    /// assert_eq!(tree.min_value(), Some(&2));
    /// ```
    pub fn min_value(&self) -> Option<&T> {
        let mut current = self.root()?;
        while let Some(left) = current.left() {
            current = left;
        }

        Some(current.value())
    }

    /// Returns the largest value in the tree, or `None` if the tree is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// assert_eq!(tree.max_value(), None);
    /// tree.extend(vec![5, 2, 9]);
    /// assert_eq!(tree.max_value(), Some(&9));
    /// ```
    pub fn max_value(&self) -> Option<&T> {
        let mut current = self.root()?;
        while let Some(right) = current.right() {
            current = right;
        }

        Some(current.value())
    }

    /// Removes a value from the tree. Returns whether the value was present in the tree.
    ///
    /// If the value occurs more than once, only one instance is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(String::from("abc"));
    /// assert!(tree.remove("abc"));
    /// assert!(!tree.remove("abc"));
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        self.take(value).is_some()
    }

    /// Removes and returns the first value in the tree equal to the given one, if any
    ///
    /// A node with two children is replaced by its in-order successor (the leftmost node of its
    /// right subtree), which inherits both of the removed node's subtrees.
    ///
    /// Time complexity: `O(height)`
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert(String::from("abc"));
    /// assert_eq!(tree.take("abc"), Some(String::from("abc")));
    /// assert_eq!(tree.take("def"), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut link = &mut self.root;
        loop {
            match link.as_deref().map(|node| value.cmp(node.value().borrow())) {
                None => return None,
                Some(Ordering::Equal) => break,
                Some(Ordering::Less) => link = link.as_mut()?.left_link(),
                Some(Ordering::Greater) => link = link.as_mut()?.right_link(),
            }
        }

        let mut target = link.take()?;
        *link = match (target.take_left(), target.take_right()) {
            // Leaf or only a left child
            (left, None) => left,
            // Only a right child
            (None, right) => right,
            (Some(left), Some(mut right)) => {
                let mut successor = match take_leftmost(&mut right) {
                    Some(mut successor) => {
                        successor.set_right(Some(right));
                        successor
                    },
                    // The right child is itself the successor and keeps its right subtree
                    None => right,
                };
                successor.set_left(Some(left));
                Some(successor)
            },
        };

        self.len -= 1;
        Some(target.into_value())
    }

    /// Clears the tree, removing all values
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::BinarySearchTree;
    ///
    /// let mut tree = BinarySearchTree::new();
    /// tree.insert("abc");
    /// assert!(!tree.is_empty());
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Performs a pre-order traversal of the tree
    ///
    /// Inserting the yielded values into an empty tree reproduces the shape of this tree.
    pub fn iter_preorder(&self) -> IterPreorder<'_, T> {
        IterPreorder::new(self.root())
    }

    /// Performs an in-order traversal of the tree, yielding values in ascending order
    pub fn iter_inorder(&self) -> IterInorder<'_, T> {
        IterInorder::new(self.root())
    }

    /// Performs a post-order traversal of the tree
    pub fn iter_postorder(&self) -> IterPostorder<'_, T> {
        IterPostorder::new(self.root())
    }

    /// Performs a level-order (breadth-first) traversal of the tree
    pub fn iter_level_order(&self) -> IterLevelOrder<'_, T> {
        IterLevelOrder::new(self.root())
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// This is a low-level API meant to be used for implementing custom traversals. The shape of
    /// the tree is determined by insertion and removal order. For a guaranteed ordering, use the
    /// various iteration methods.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstree::{BinarySearchTree, tree::Node};
    ///
    /// // Counts the leaves below `node`
    /// fn count_leaves<T>(node: &Node<T>) -> usize {
    ///     let mut leaves = 0;
    ///     let mut stack = vec![node];
    ///     while let Some(node) = stack.pop() {
    ///         if !node.has_left() && !node.has_right() {
    ///             leaves += 1;
    ///         }
    ///         stack.extend(node.left());
    ///         stack.extend(node.right());
    ///     }
    ///     leaves
    /// }
    ///
    /// let tree: BinarySearchTree<_> = vec![4, 2, 6, 1].into_iter().collect();
    /// assert_eq!(tree.root().map(count_leaves), Some(2));
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }
}

/// Detaches the leftmost node of `parent`'s left subtree, relinking that node's right subtree into
/// the slot it leaves behind. Returns `None` if `parent` has no left subtree.
fn take_leftmost<T>(parent: &mut Node<T>) -> Option<Box<Node<T>>> {
    let mut link = parent.left_link();
    while link.as_deref()?.has_left() {
        link = link.as_mut()?.left_link();
    }

    let mut leftmost = link.take()?;
    *link = leftmost.take_right();
    Some(leftmost)
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T: Ord> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;
    type IntoIter = IterInorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_inorder()
    }
}
