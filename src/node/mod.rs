//! The standalone doubly-linked [`Node`] cell.
//!
//! [`LinkedList`](crate::linked::LinkedList) and
//! [`BinarySearchTree`](crate::tree::BinarySearchTree) each own a dedicated node type instead of
//! reusing this one, so that a tree child is never described by a field called `next`. This cell
//! is the safe, freestanding building block for hand-rolled chains.

mod node;

pub use node::*;
