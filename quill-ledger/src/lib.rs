//! # Quill Ledger
//!
//! The ledger engine: a tamper-evident, append-only sequence of blocks
//! over a key-value block store.
//!
//! This crate implements:
//! - Genesis bootstrap on first open of empty storage
//! - Serialized block appends with height assignment and hash chaining
//! - Retrieval by height and full-chain reads
//! - Per-block and chain-wide validation that detects post-commit mutation
//! - The explicit tamper-testing write path the validators exist to catch
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use quill_ledger::Ledger;
//! use quill_storage::{BlockStore, MemoryBackend};
//!
//! let store = BlockStore::new(Arc::new(MemoryBackend::new()));
//! let ledger = Ledger::open(store).await?;
//! let block = ledger.append(serde_json::json!("hello")).await?;
//! assert_eq!(block.height, 1); // height 0 is the genesis block
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod genesis;
mod ledger;

pub use error::{LedgerError, LedgerResult};
pub use genesis::{genesis_body, GENESIS_BODY};
pub use ledger::Ledger;
