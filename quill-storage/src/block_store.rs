//! Height-keyed block storage.
//!
//! [`BlockStore`] is the adapter the ledger engine reads and writes
//! through: one entry per height, value is the full block record. It owns
//! physical persistence only — height assignment, linking, and validation
//! live in the engine.

use std::sync::Arc;

use quill_core::{codec, Block};

use crate::error::StorageError;
use crate::keys::{block_key, block_prefix};
use crate::kv::KvBackend;

/// Height-keyed block storage over a key-value backend.
pub struct BlockStore<B: KvBackend + ?Sized> {
    backend: Arc<B>,
}

impl<B: KvBackend + ?Sized> BlockStore<B> {
    /// Create a new block store over the given backend.
    pub fn new(backend: Arc<B>) -> Self {
        Self { backend }
    }

    /// Get the block at `height`.
    ///
    /// An uncommitted height resolves to `Ok(None)`; only underlying I/O
    /// or decode failures are errors.
    pub fn get(&self, height: u64) -> Result<Option<Block>, StorageError> {
        match self.backend.get(&block_key(height))? {
            Some(bytes) => {
                let block: Block = codec::decode(&bytes)?;
                Ok(Some(block))
            }
            None => Ok(None),
        }
    }

    /// Persist `block` at `height`, overwriting any existing value.
    ///
    /// Overwrite is deliberate: the tamper-testing path replaces committed
    /// blocks in place. Returns the committed value.
    pub fn put(&self, height: u64, block: &Block) -> Result<Block, StorageError> {
        let bytes = codec::encode(block)?;
        self.backend.put(&block_key(height), &bytes)?;
        Ok(block.clone())
    }

    /// Check whether a block is committed at `height`.
    pub fn contains(&self, height: u64) -> Result<bool, StorageError> {
        self.backend.exists(&block_key(height))
    }

    /// Count all committed blocks by scanning the block key range.
    ///
    /// This is the chain height: with dense zero-based heights, the entry
    /// count equals the next height to assign.
    pub fn count(&self) -> Result<u64, StorageError> {
        let iter = self.backend.prefix_iterator(&block_prefix())?;
        Ok(iter.count() as u64)
    }

    /// Flush the underlying backend.
    pub fn flush(&self) -> Result<(), StorageError> {
        self.backend.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryBackend;
    use serde_json::json;

    fn create_store() -> BlockStore<MemoryBackend> {
        BlockStore::new(Arc::new(MemoryBackend::new()))
    }

    fn sealed_block(height: u64, body: &str) -> Block {
        let mut block = Block::new(json!(body));
        block.height = height;
        block.timestamp = 1700000000 + height;
        block.hash = block.compute_hash().unwrap();
        block
    }

    #[test]
    fn test_empty_store() {
        let store = create_store();
        assert_eq!(store.count().unwrap(), 0);
        assert!(store.get(0).unwrap().is_none());
        assert!(!store.contains(0).unwrap());
    }

    #[test]
    fn test_put_get_roundtrip() {
        let store = create_store();
        let block = sealed_block(0, "payload");

        let committed = store.put(0, &block).unwrap();
        assert_eq!(committed, block);

        let loaded = store.get(0).unwrap().unwrap();
        assert_eq!(loaded, block);
        assert!(loaded.verify_hash().unwrap());
    }

    #[test]
    fn test_count_tracks_entries() {
        let store = create_store();

        for height in 0..5 {
            store.put(height, &sealed_block(height, "x")).unwrap();
            assert_eq!(store.count().unwrap(), height + 1);
        }
    }

    #[test]
    fn test_overwrite_does_not_change_count() {
        let store = create_store();
        store.put(0, &sealed_block(0, "original")).unwrap();
        store.put(0, &sealed_block(0, "replacement")).unwrap();

        assert_eq!(store.count().unwrap(), 1);
        assert_eq!(store.get(0).unwrap().unwrap().body, json!("replacement"));
    }

    #[test]
    fn test_body_roundtrips_structured_payloads() {
        let store = create_store();
        let mut block = Block::new(json!({
            "star": "Betelgeuse",
            "ra": "05h 55m",
            "mag": 0.45,
            "tags": ["variable", "supergiant"]
        }));
        block.hash = block.compute_hash().unwrap();

        store.put(0, &block).unwrap();
        let loaded = store.get(0).unwrap().unwrap();

        assert_eq!(loaded.body, block.body);
        assert!(loaded.verify_hash().unwrap());
    }

    #[test]
    fn test_dyn_backend() {
        // The node layer picks a backend at runtime; the store must work
        // behind a trait object.
        let backend: Arc<dyn KvBackend> = Arc::new(MemoryBackend::new());
        let store = BlockStore::new(backend);

        store.put(0, &sealed_block(0, "dyn")).unwrap();
        assert_eq!(store.count().unwrap(), 1);
    }
}
