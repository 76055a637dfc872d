//! A plain, unbalanced binary search tree.
//!
//! [`BinarySearchTree`] keeps values of any `Ord` type in owned `Box` nodes. It supports insertion,
//! lookup, removal and min/max queries, as well as pre-order, in-order, post-order and level-order
//! traversal. No rebalancing is ever done, so the shape of the tree (and its performance) depends
//! on insertion order.
//!
//! Every algorithm uses an explicit stack or queue instead of recursion, so even a tree that has
//! degenerated into a linked list can be traversed, cloned and dropped safely.
//!
//! # Features
//!
//! - `serde` (on by default): implements `Serialize`/`Deserialize`. Trees are written as a
//!   pre-order sequence of values so that deserializing rebuilds the exact same shape.

#![warn(missing_docs, rust_2018_idioms)]

pub mod tree;

pub use tree::BinarySearchTree;

/// Creates a [`BinarySearchTree`] containing the given values, inserted in the order they are
/// listed
///
/// ```
/// use bstree::bstree;
///
/// let tree = bstree![2, 1, 3];
/// assert_eq!(tree.root().map(|root| *root.value()), Some(2));
/// ```
#[macro_export(local_inner_macros)]
macro_rules! bstree {
    ($($value:expr,)+) => { bstree!($($value),+) };
    ($($value:expr),*) => {
        {
            let mut _tree = $crate::BinarySearchTree::new();
            $(
                _tree.insert($value);
            )*
            _tree
        }
    };
}
