//! # Quill Core
//!
//! Core types, hashing, and canonical serialization for the Quill ledger.
//!
//! This crate provides the foundation for all other Quill crates:
//! - The [`Block`] record and its digest rules
//! - SHA-256 hashing helpers
//! - Canonical JSON encoding used for both persistence and digests

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod block;
pub mod codec;
pub mod error;
pub mod hash;

pub use block::Block;
pub use error::CodecError;
