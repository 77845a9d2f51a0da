use std::fmt::{self, Debug, Formatter};
use std::iter;
use std::mem;

use super::{Chain, ChainNode};
use crate::util::option::OptionExtension;
#[doc(inline)]
pub use crate::util::error::{LoadFactorOutOfRange, TableConfigError, ZeroCapacity};

/// The bucket count used by [`HashTable::new`].
pub const DEFAULT_CAPACITY: usize = 16;

/// The load factor used by constructors that don't take one.
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

const GROWTH_FACTOR: usize = 2;

/// A hash table from string keys to values, resolving collisions by chaining.
///
/// # Hashing
/// The hash is the sum of the key's UTF-16 code units, modulo the bucket count. That makes it
/// cheap and easy to reason about, and also extremely collision-prone: any two keys built from
/// the same multiset of characters share a bucket (`"ab"`/`"ba"`). The weakness is intentional —
/// chain handling is the interesting part of this structure — so don't swap the hash for a
/// stronger one.
///
/// # Growth
/// When an insert would push the size above `capacity * load_factor`, the bucket array doubles
/// and every entry is rehashed against the new capacity before the insert proceeds. The capacity
/// never shrinks.
pub struct HashTable<V> {
    pub(crate) buckets: Vec<Chain<V>>,
    pub(crate) len: usize,
    pub(crate) load_factor: f64,
}

impl<V> HashTable<V> {
    /// Creates a table with [`DEFAULT_CAPACITY`] buckets and [`DEFAULT_LOAD_FACTOR`].
    pub fn new() -> HashTable<V> {
        HashTable {
            buckets: empty_buckets(DEFAULT_CAPACITY),
            len: 0,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }

    /// Creates a table with the provided bucket count and [`DEFAULT_LOAD_FACTOR`].
    pub fn with_capacity(capacity: usize) -> Result<HashTable<V>, TableConfigError> {
        HashTable::with_capacity_and_load_factor(capacity, DEFAULT_LOAD_FACTOR)
    }

    /// Creates a table with the provided bucket count and load factor. The capacity must be at
    /// least 1 (hashes are taken modulo the capacity) and the load factor within `(0, 1]`.
    pub fn with_capacity_and_load_factor(
        capacity: usize,
        load_factor: f64,
    ) -> Result<HashTable<V>, TableConfigError> {
        if capacity == 0 {
            return Err(ZeroCapacity.into());
        }
        // Written so that NaN fails too.
        if !(load_factor > 0.0 && load_factor <= 1.0) {
            return Err(LoadFactorOutOfRange { load_factor }.into());
        }

        Ok(HashTable {
            buckets: empty_buckets(capacity),
            len: 0,
            load_factor,
        })
    }

    /// Returns the number of entries in the table.
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Returns true if the table holds no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current bucket count.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the configured load factor.
    pub const fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Returns the bucket index for `key` against the current capacity: the sum of the key's
    /// UTF-16 code units, modulo the bucket count.
    pub fn hash_code(&self, key: &str) -> usize {
        let sum: usize = key.encode_utf16().map(usize::from).sum();
        sum % self.capacity()
    }

    /// Inserts a `key`-`value` pair. If the key is already present its value is replaced and the
    /// old value returned; otherwise the entry is appended at the end of its bucket's chain and
    /// the size grows by one.
    ///
    /// The growth check runs before the key is even hashed — also when the insert turns out to
    /// be an update, mirroring how the structure has always behaved.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        if (self.len + 1) as f64 > self.capacity() as f64 * self.load_factor {
            self.grow();
        }

        let key = key.into();
        let index = self.hash_code(&key);

        let mut link = &mut self.buckets[index];
        loop {
            match link {
                Some(node) if node.key == key => {
                    return Some(mem::replace(&mut node.value, value));
                },
                Some(node) => link = &mut node.next,
                None => {
                    *link = Some(Box::new(ChainNode::new(key, value)));
                    self.len += 1;
                    return None;
                },
            }
        }
    }

    /// Returns the value stored for `key`, or None if the table doesn't contain it.
    pub fn get_value(&self, key: &str) -> Option<&V> {
        let mut link = &self.buckets[self.hash_code(key)];
        while let Some(node) = link {
            if node.key == key {
                return Some(&node.value);
            }
            link = &node.next;
        }
        None
    }

    /// Returns true if the table contains an entry for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get_value(key).is_some()
    }

    /// Removes the entry for `key` and returns its value, or None if the table doesn't contain
    /// it. Removing a chain's head promotes its successor to bucket head; removing an interior
    /// entry splices its predecessor to its successor.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        let index = self.hash_code(key);

        let mut link = &mut self.buckets[index];
        while link.as_ref().is_some_and(|node| node.key != key) {
            // UNREACHABLE: the loop condition just saw an occupied link.
            link = &mut unsafe { link.as_mut().unreachable() }.next;
        }

        if link.is_none() {
            return None;
        }
        // UNREACHABLE: the loop only exits on an occupied link, and the empty case returned.
        let node = unsafe { link.take().unreachable() };
        *link = node.next;
        self.len -= 1;
        Some(node.value)
    }

    /// Returns every stored value, in bucket order and then chain order within each bucket.
    pub fn retrieve_all(&self) -> Vec<&V> {
        let mut values = Vec::with_capacity(self.len);
        for bucket in &self.buckets {
            let mut link = bucket;
            while let Some(node) = link {
                values.push(&node.value);
                link = &node.next;
            }
        }
        values
    }

    /// Doubles the bucket array and rehashes every entry against the new capacity, in bucket
    /// order and then chain order, through the regular insert path.
    fn grow(&mut self) {
        let new_capacity = self.capacity() * GROWTH_FACTOR;
        let old_buckets = mem::replace(&mut self.buckets, empty_buckets(new_capacity));

        // Every entry is counted again as it is reinserted.
        self.len = 0;

        for bucket in old_buckets {
            let mut link = bucket;
            while let Some(node) = link {
                let node = *node;
                link = node.next;
                self.insert(node.key, node.value);
            }
        }
    }
}

fn empty_buckets<V>(capacity: usize) -> Vec<Chain<V>> {
    iter::repeat_with(|| None).take(capacity).collect()
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        HashTable::new()
    }
}

impl<V: Debug> Debug for HashTable<V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut entries = f.debug_map();
        for bucket in &self.buckets {
            let mut link = bucket;
            while let Some(node) = link {
                entries.entry(&node.key, &node.value);
                link = &node.next;
            }
        }
        entries.finish()?;
        write!(
            f,
            " (size: {}, capacity: {}, load factor: {})",
            self.len,
            self.capacity(),
            self.load_factor
        )
    }
}
