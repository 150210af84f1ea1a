//! Error types for the Quill core crate.

use std::fmt;

/// Errors related to canonical encoding and decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CodecError {
    /// Failed to encode a value to bytes.
    EncodeFailed(String),
    /// Failed to decode a value from bytes.
    DecodeFailed(String),
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::EncodeFailed(msg) => write!(f, "encode failed: {}", msg),
            CodecError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
        }
    }
}

impl std::error::Error for CodecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = CodecError::EncodeFailed("bad value".into());
        assert!(e.to_string().contains("encode failed"));

        let e = CodecError::DecodeFailed("trailing bytes".into());
        assert!(e.to_string().contains("decode failed"));
    }
}
