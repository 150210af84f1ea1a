//! Genesis block payload.
//!
//! The genesis block is the fixed height-0 block committed automatically
//! the first time a ledger is opened over empty storage. It goes through
//! the normal commit path, so only its payload is special: a fixed marker
//! string. Its `previous_hash` is the empty string — the one block in any
//! chain allowed to carry it.

use serde_json::Value;

/// Payload marker carried by every genesis block.
pub const GENESIS_BODY: &str = "First block in the chain - Genesis block";

/// The genesis payload as a JSON value, ready to append.
pub fn genesis_body() -> Value {
    Value::String(GENESIS_BODY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genesis_body_is_marker_string() {
        assert_eq!(genesis_body(), Value::String(GENESIS_BODY.to_string()));
    }
}
