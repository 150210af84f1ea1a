//! The ledger block record.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec;
use crate::error::CodecError;
use crate::hash::sha256_hex;

/// A single record in the ledger.
///
/// A block is constructed from a payload with placeholder metadata and
/// finalized by the ledger engine in one commit step: the engine assigns
/// `height`, `timestamp`, and `previous_hash`, then seals the block by
/// computing `hash` over all other fields. Once committed a block is
/// immutable; the only write path that may replace one is the explicit
/// tamper-testing operation, which the validators exist to detect.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Zero-based position in the sequence, assigned at commit time.
    pub height: u64,

    /// Caller-supplied payload. Opaque to the engine.
    pub body: Value,

    /// Unix timestamp in seconds, assigned at commit time.
    pub timestamp: u64,

    /// Hex digest of the predecessor's `hash`.
    /// Empty string for the genesis block.
    pub previous_hash: String,

    /// Hex-encoded SHA-256 digest over the block with this field blanked.
    pub hash: String,
}

impl Block {
    /// Construct an unsealed block carrying only its payload.
    ///
    /// All other fields are placeholders the engine overwrites at commit.
    /// No validation is performed here; the payload is unconstrained.
    pub fn new(body: Value) -> Self {
        Self {
            height: 0,
            body,
            timestamp: 0,
            previous_hash: String::new(),
            hash: String::new(),
        }
    }

    /// Compute the block digest.
    ///
    /// The digest is SHA-256 over the canonical encoding of the block with
    /// the `hash` field held as the empty string, so it can be recomputed
    /// from a stored block and compared against the sealed value.
    pub fn compute_hash(&self) -> Result<String, CodecError> {
        let mut unsealed = self.clone();
        unsealed.hash = String::new();
        let bytes = codec::encode(&unsealed)?;
        Ok(sha256_hex(&bytes))
    }

    /// Verify the block's internal integrity.
    ///
    /// Returns true iff recomputing the digest reproduces the stored
    /// `hash`. This does not check the link to the predecessor.
    pub fn verify_hash(&self) -> Result<bool, CodecError> {
        Ok(self.compute_hash()? == self.hash)
    }

    /// Check if this is a genesis block.
    #[inline]
    pub fn is_genesis(&self) -> bool {
        self.height == 0 && self.previous_hash.is_empty()
    }
}
