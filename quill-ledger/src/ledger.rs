//! The ledger engine.

use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;
use tokio::sync::Mutex;

use quill_core::Block;
use quill_storage::{BlockStore, KvBackend, StorageError};

use crate::error::{LedgerError, LedgerResult};
use crate::genesis::genesis_body;

/// A tamper-evident, append-only ledger over a block store.
///
/// The engine is stateless orchestration: all durable state lives in the
/// store, and the only in-memory state is the lock that serializes
/// appends. Heights are dense and zero-based; every block past genesis
/// carries the hash of its predecessor, captured at commit time.
///
/// Reads may run concurrently with each other and with appends. A read
/// observing an absent height means "not yet committed", not corruption.
pub struct Ledger<B: KvBackend + ?Sized> {
    store: BlockStore<B>,
    append_lock: Mutex<()>,
}

impl<B: KvBackend + ?Sized> Ledger<B> {
    /// Open a ledger over the given store, committing the genesis block
    /// if the store is empty.
    ///
    /// Genesis creation goes through the normal commit path; if it fails,
    /// opening fails, so an open ledger always has a block at height 0.
    pub async fn open(store: BlockStore<B>) -> LedgerResult<Self> {
        let ledger = Self {
            store,
            append_lock: Mutex::new(()),
        };

        if ledger.store.count()? == 0 {
            let genesis = ledger.append(genesis_body()).await?;
            tracing::info!(hash = %genesis.hash, "created genesis block");
        }

        Ok(ledger)
    }

    /// Append a payload as the next block in the chain.
    ///
    /// Commit steps, under the append lock: read the current height,
    /// stamp height and timestamp, capture the predecessor's hash, seal
    /// the block by computing its digest, then persist — refusing to
    /// overwrite an already-committed height. First writer wins; a loser
    /// gets [`LedgerError::Conflict`].
    ///
    /// A predecessor that cannot be read aborts the append: committing a
    /// mis-linked block would be undetectable by per-block validation.
    pub async fn append(&self, body: Value) -> LedgerResult<Block> {
        let _guard = self.append_lock.lock().await;

        let height = self.store.count()?;

        let mut block = Block::new(body);
        block.height = height;
        block.timestamp = now_secs();

        if height > 0 {
            let previous = self
                .store
                .get(height - 1)?
                .ok_or(LedgerError::MissingPredecessor { height })?;
            block.previous_hash = previous.hash;
        }

        block.hash = block.compute_hash().map_err(StorageError::from)?;

        if self.store.contains(height)? {
            return Err(LedgerError::Conflict { height });
        }
        let committed = self.store.put(height, &block)?;

        tracing::debug!(height, hash = %committed.hash, "committed block");
        Ok(committed)
    }

    /// The number of committed blocks.
    ///
    /// Valid block heights are `0..height()`.
    pub async fn height(&self) -> LedgerResult<u64> {
        Ok(self.store.count()?)
    }

    /// Get the block at `height`, or `None` if nothing is committed there.
    pub async fn block(&self, height: u64) -> LedgerResult<Option<Block>> {
        Ok(self.store.get(height)?)
    }

    /// Read the full chain, ascending by height.
    ///
    /// Unlike [`Ledger::block`], a hole here is an error: heights below
    /// the count are supposed to be dense.
    pub async fn chain(&self) -> LedgerResult<Vec<Block>> {
        let height = self.store.count()?;
        let mut blocks = Vec::with_capacity(height as usize);

        for h in 0..height {
            let block = self
                .store
                .get(h)?
                .ok_or(LedgerError::NotFound { height: h })?;
            blocks.push(block);
        }

        Ok(blocks)
    }

    /// Validate the internal integrity of the block at `height`.
    ///
    /// Recomputes the digest with the hash field blanked and compares it
    /// to the stored value. The link to the predecessor is not checked
    /// here — that is [`Ledger::validate_chain`]'s job.
    pub async fn validate_block(&self, height: u64) -> LedgerResult<bool> {
        let block = self
            .store
            .get(height)?
            .ok_or(LedgerError::NotFound { height })?;

        Ok(block.verify_hash().map_err(StorageError::from)?)
    }

    /// Validate the whole chain, returning invalid heights in ascending
    /// order.
    ///
    /// A height is invalid if its block fails digest verification, or if
    /// its `previous_hash` does not match the stored hash of the block
    /// below it. Idempotent absent intervening writes.
    pub async fn validate_chain(&self) -> LedgerResult<Vec<u64>> {
        let height = self.store.count()?;
        let mut invalid = Vec::new();
        let mut previous_hash: Option<String> = None;

        for h in 0..height {
            let block = self
                .store
                .get(h)?
                .ok_or(LedgerError::NotFound { height: h })?;

            let mut valid = block.verify_hash().map_err(StorageError::from)?;

            if let Some(prev_hash) = &previous_hash {
                if block.previous_hash != *prev_hash {
                    valid = false;
                }
            }

            if !valid {
                tracing::warn!(height = h, "block failed validation");
                invalid.push(h);
            }

            previous_hash = Some(block.hash);
        }

        Ok(invalid)
    }

    /// Overwrite the block at `height` verbatim, without resealing it.
    ///
    /// Test-support operation: this is the only path that may violate the
    /// hash and link invariants, and the validators exist to detect its
    /// effects. The target height must already be committed.
    pub async fn tamper_block(&self, height: u64, block: Block) -> LedgerResult<Block> {
        if !self.store.contains(height)? {
            return Err(LedgerError::NotFound { height });
        }

        tracing::warn!(height, "overwriting committed block without resealing");
        Ok(self.store.put(height, &block)?)
    }

    /// Flush the underlying store.
    pub fn flush(&self) -> LedgerResult<()> {
        Ok(self.store.flush()?)
    }
}

/// Current wall-clock time in whole seconds.
fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
