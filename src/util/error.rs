use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// An operation required at least one element, but the linked list had none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyList;

impl Display for EmptyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The linked list is empty!")
    }
}

impl Error for EmptyList {}

/// An operation required at least one node, but the tree had none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyTree;

impl Display for EmptyTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The binary search tree is empty!")
    }
}

impl Error for EmptyTree {}

/// A hash table load factor outside of `(0, 1]`. NaN lands here too.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadFactorOutOfRange {
    pub load_factor: f64,
}

impl Display for LoadFactorOutOfRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Load factor {} is not within (0, 1]!", self.load_factor)
    }
}

impl Error for LoadFactorOutOfRange {}

/// A hash table can't be constructed without buckets, because hashes are taken modulo the bucket
/// count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZeroCapacity;

impl Display for ZeroCapacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "A hash table requires a capacity of at least 1!")
    }
}

impl Error for ZeroCapacity {}

#[derive(Debug, Clone, Copy, PartialEq, Display, Error, From, IsVariant)]
pub enum TableConfigError {
    LoadFactorOutOfRange(LoadFactorOutOfRange),
    ZeroCapacity(ZeroCapacity),
}
