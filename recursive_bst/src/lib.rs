//! A recursive binary search tree
//!
//! Every algorithm here is written in its textbook recursive form: insertion, removal and the
//! three depth-first traversals (which hand each value to a visitor callback). Recursion depth is
//! the height of the tree, so this is only suitable for reasonably balanced workloads. A tree built
//! from sorted input can exhaust the call stack, including when it is dropped.
//!
//! Used as a reference to test and benchmark the `bstree` crate.

#![allow(clippy::upper_case_acronyms)]

mod tree;

pub use tree::RecursiveBST;
