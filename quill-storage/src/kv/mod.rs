//! Key-value storage backends.
//!
//! This module provides an abstraction over key-value storage with two
//! implementations:
//! - `MemoryBackend`: in-memory BTreeMap storage for tests and ephemeral runs
//! - `RocksBackend`: RocksDB-based persistent storage for production

mod memory_backend;
mod rocks_backend;

pub use memory_backend::MemoryBackend;
pub use rocks_backend::RocksBackend;

use crate::error::StorageError;

/// Type alias for the iterator returned by `prefix_iterator`.
pub type PrefixIterator<'a> = Box<dyn Iterator<Item = (Vec<u8>, Vec<u8>)> + 'a>;

/// Trait for key-value storage backends.
///
/// Implementations must provide per-key read-after-write consistency
/// within one process: a `put` followed by a `get` on the same key,
/// sequenced by the caller, observes the write.
pub trait KvBackend: Send + Sync {
    /// Get a value by key. Absent keys resolve to `None`, not an error.
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError>;

    /// Put a key-value pair, overwriting any existing value at the key.
    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StorageError>;

    /// Check if a key exists.
    fn exists(&self, key: &[u8]) -> Result<bool, StorageError> {
        Ok(self.get(key)?.is_some())
    }

    /// Iterate over all entries whose key starts with `prefix`, in key order.
    fn prefix_iterator(&self, prefix: &[u8]) -> Result<PrefixIterator<'_>, StorageError>;

    /// Flush any buffered data to disk (if applicable).
    fn flush(&self) -> Result<(), StorageError> {
        Ok(())
    }
}
