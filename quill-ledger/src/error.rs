//! Ledger error types.

use thiserror::Error;

use quill_storage::StorageError;

/// Result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Underlying persistence failure. Propagated, never retried here.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The requested height has no committed block.
    ///
    /// Distinct from [`LedgerError::Storage`] so callers can map it to a
    /// missing-resource response rather than an internal failure.
    #[error("no block committed at height {height}")]
    NotFound {
        /// The height that was requested.
        height: u64,
    },

    /// An append lost the race for its height: the key was already
    /// committed when the write was attempted. First writer wins.
    #[error("append collision at height {height}")]
    Conflict {
        /// The height both writers contended for.
        height: u64,
    },

    /// The chain is missing the predecessor a commit or read depends on.
    /// Heights are dense, so this indicates external interference.
    #[error("missing predecessor for height {height}")]
    MissingPredecessor {
        /// The height whose predecessor could not be read.
        height: u64,
    },
}
