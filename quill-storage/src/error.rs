//! Storage error types.

use thiserror::Error;

/// Errors that can occur during storage operations.
///
/// An absent key is not an error: reads resolve it to `None`.
#[derive(Debug, Error)]
pub enum StorageError {
    /// RocksDB error.
    #[error("RocksDB error: {0}")]
    RocksDb(String),

    /// Encoding or decoding of a stored record failed.
    #[error("codec error: {0}")]
    Codec(String),
}

impl From<rocksdb::Error> for StorageError {
    fn from(e: rocksdb::Error) -> Self {
        StorageError::RocksDb(e.to_string())
    }
}

impl From<quill_core::CodecError> for StorageError {
    fn from(e: quill_core::CodecError) -> Self {
        StorageError::Codec(e.to_string())
    }
}
