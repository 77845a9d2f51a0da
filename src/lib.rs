//! Classic in-memory data structures, written from scratch.
//!
//! # Purpose
//! This crate is a learning project: a doubly-linked [`Node`](node::Node) cell, a
//! [`LinkedList`](linked::LinkedList), an unbalanced
//! [`BinarySearchTree`](tree::BinarySearchTree) and a chaining
//! [`HashTable`](hash::HashTable), each implemented by hand rather than on top of the standard
//! library's collections. Writing the pointer plumbing myself is the whole point; none of these
//! types are meant to outperform [`std::collections`].
//!
//! # Method
//! Every structure exclusively owns its own nodes. The linked list uses raw pointers internally
//! (with the unsafe code kept behind a small handle type), the tree and the hash table's chains
//! are plain [`Box`] recursion, and the standalone [`Node`](node::Node) cell is entirely safe
//! code with ownership transferred explicitly on every relink. References handed out by getters
//! are immutable, so a caller can inspect a structure's shape but never corrupt its links.
//!
//! # Error Handling
//! Most misuse is unrepresentable: you can't insert an absent value or link a non-node, and key
//! and ordering requirements are trait bounds. What's left is reported through small, strongly
//! typed errors: asking an empty list for its head, taking the minimum of an empty tree, or
//! constructing a hash table with a load factor outside `(0, 1]`. "Not found" is never an error,
//! it's `None` (or `false`).
//!
//! # Dependencies
//! Only `derive_more`, for the repetitive parts of composing error enums.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod hash;
pub mod linked;
pub mod node;
pub mod tree;

pub(crate) mod util;
