//! RocksDB key-value backend for production use.

use std::path::Path;
use std::sync::Arc;

use rocksdb::{IteratorMode, Options, DB};

use super::{KvBackend, PrefixIterator};
use crate::error::StorageError;

/// RocksDB-based key-value backend.
///
/// Provides persistent, crash-safe storage for the ledger's block records.
pub struct RocksBackend {
    db: Arc<DB>,
}

impl RocksBackend {
    /// Open or create a RocksDB database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.set_compression_type(rocksdb::DBCompressionType::Lz4);

        let db = DB::open(&opts, path)?;
        Ok(Self { db: Arc::new(db) })
    }
}

impl KvBackend for RocksBackend {
    fn get(&self, key: &[u8]) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.db.get(key)?)
    }

    fn put(&self, key: &[u8], value: &[u8]) -> Result<(), StorageError> {
        self.db.put(key, value)?;
        Ok(())
    }

    fn prefix_iterator(&self, prefix: &[u8]) -> Result<PrefixIterator<'_>, StorageError> {
        let prefix_vec = prefix.to_vec();
        let iter = self
            .db
            .iterator(IteratorMode::From(prefix, rocksdb::Direction::Forward));

        let prefix_iter = iter
            .map(|result| result.map(|(k, v)| (k.to_vec(), v.to_vec())))
            .take_while(move |result| match result {
                Ok((k, _)) => k.starts_with(&prefix_vec),
                Err(_) => false,
            })
            .filter_map(|result| result.ok());

        Ok(Box::new(prefix_iter))
    }

    fn flush(&self) -> Result<(), StorageError> {
        self.db.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_backend() -> (RocksBackend, TempDir) {
        let dir = TempDir::new().unwrap();
        let backend = RocksBackend::open(dir.path()).unwrap();
        (backend, dir)
    }

    #[test]
    fn test_basic_operations() {
        let (backend, _dir) = create_temp_backend();

        backend.put(b"key1", b"value1").unwrap();
        assert_eq!(backend.get(b"key1").unwrap(), Some(b"value1".to_vec()));

        assert!(backend.get(b"missing").unwrap().is_none());
        assert!(backend.exists(b"key1").unwrap());
        assert!(!backend.exists(b"missing").unwrap());
    }

    #[test]
    fn test_overwrite() {
        let (backend, _dir) = create_temp_backend();

        backend.put(b"key", b"old").unwrap();
        backend.put(b"key", b"new").unwrap();

        assert_eq!(backend.get(b"key").unwrap(), Some(b"new".to_vec()));
    }

    #[test]
    fn test_prefix_iterator() {
        let (backend, _dir) = create_temp_backend();

        backend.put(b"blk:1", b"a").unwrap();
        backend.put(b"blk:2", b"b").unwrap();
        backend.put(b"txn:1", b"c").unwrap();

        let items: Vec<_> = backend.prefix_iterator(b"blk:").unwrap().collect();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].0, b"blk:1");
        assert_eq!(items[1].0, b"blk:2");
    }

    #[test]
    fn test_persistence_across_reopen() {
        let dir = TempDir::new().unwrap();

        {
            let backend = RocksBackend::open(dir.path()).unwrap();
            backend.put(b"key", b"value").unwrap();
            backend.flush().unwrap();
        }

        let backend = RocksBackend::open(dir.path()).unwrap();
        assert_eq!(backend.get(b"key").unwrap(), Some(b"value".to_vec()));
    }
}
