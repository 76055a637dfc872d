use std::fmt;

/// An owned link to a subtree
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single node of the binary search tree
///
/// Every value in the left subtree of a node is strictly less than the node's value. Every value
/// in the right subtree is greater than or equal to it.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
    where T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Only the direct children are printed so that formatting never recurses
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("left", &self.left().map(Node::value))
            .field("right", &self.right().map(Node::value))
            .finish()
    }
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    /// Returns the value stored in this node
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns the root of the left subtree of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the root of the right subtree of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    pub(crate) fn left_link(&mut self) -> &mut Link<T> {
        &mut self.left
    }

    pub(crate) fn right_link(&mut self) -> &mut Link<T> {
        &mut self.right
    }

    pub(crate) fn children_mut(&mut self) -> (&mut Link<T>, &mut Link<T>) {
        (&mut self.left, &mut self.right)
    }

    pub(crate) fn take_left(&mut self) -> Link<T> {
        self.left.take()
    }

    pub(crate) fn take_right(&mut self) -> Link<T> {
        self.right.take()
    }

    /// New subtree MUST maintain BST property
    pub(crate) fn set_left(&mut self, subtree: Link<T>) {
        debug_assert!(self.left.is_none());
        self.left = subtree;
    }

    /// New subtree MUST maintain BST property
    pub(crate) fn set_right(&mut self, subtree: Link<T>) {
        debug_assert!(self.right.is_none());
        self.right = subtree;
    }
}
