//! Key schema encoding for storage.
//!
//! The ledger persists one entry per block, keyed by height. Keys carry a
//! single prefix byte so unrelated record types could share the store
//! without colliding, and heights are big-endian so lexicographic key
//! order equals height order.

/// Prefix byte for block records: `0x01 || height_be`.
pub const BLOCK_PREFIX: u8 = 0x01;

/// Create the storage key for the block at `height`.
pub fn block_key(height: u64) -> Vec<u8> {
    let mut key = Vec::with_capacity(9);
    key.push(BLOCK_PREFIX);
    key.extend_from_slice(&height.to_be_bytes());
    key
}

/// The key prefix covering all block records.
pub fn block_prefix() -> [u8; 1] {
    [BLOCK_PREFIX]
}
