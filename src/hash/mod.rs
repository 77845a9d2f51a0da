//! The chaining [`HashTable`].

mod chain;
mod hash_table;
mod tests;

pub(crate) use chain::*;
pub use hash_table::*;
