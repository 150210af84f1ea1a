//! # Quill Storage
//!
//! Persistent storage for the Quill ledger.
//!
//! This crate provides:
//! - A [`KvBackend`] trait abstracting over key-value stores
//! - Disk-backed storage via RocksDB and an in-memory backend for tests
//! - [`BlockStore`], the height-keyed block adapter the ledger engine
//!   reads and writes through
//!
//! The storage layer has no knowledge of chain semantics: sequencing,
//! linking, and validation are the ledger engine's job. The one contract
//! the adapter guarantees is per-key read-after-write consistency within
//! a single process.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod block_store;
pub mod error;
pub mod keys;
pub mod kv;

pub use block_store::BlockStore;
pub use error::StorageError;
pub use kv::{KvBackend, MemoryBackend, RocksBackend};
