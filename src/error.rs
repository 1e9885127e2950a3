//! Error types for tranche.

/// Errors that can occur when configuring a chunker.
///
/// Chunking itself never fails; only building a limit can.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),
}

/// Result type for tranche operations.
pub type Result<T> = std::result::Result<T, Error>;
