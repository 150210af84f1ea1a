//! Canonical JSON encoding for ledger records.
//!
//! Blocks carry arbitrary caller-supplied JSON bodies, so the persisted
//! and digested form of a block is JSON rather than a binary format.
//! The encoding is deterministic for equal values:
//! - Struct fields serialize in declaration order.
//! - JSON object keys are kept sorted (`serde_json`'s default map is a
//!   `BTreeMap`), so a decoded body re-encodes to identical bytes.
//!
//! Block digests are computed over exactly these bytes; any change to the
//! encoding rules is a chain-breaking change.

use serde::{de::DeserializeOwned, Serialize};

use crate::error::CodecError;

/// Encode a value to canonical JSON bytes.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, CodecError> {
    serde_json::to_vec(value).map_err(|e| CodecError::EncodeFailed(e.to_string()))
}

/// Decode a value from canonical JSON bytes.
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    serde_json::from_slice(bytes).map_err(|e| CodecError::DecodeFailed(e.to_string()))
}
