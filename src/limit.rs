//! Chunk size limit.
//!
//! ## Bytes, Not Characters
//!
//! Embedding providers cap their inputs by encoded size, so the limit is
//! measured in UTF-8 bytes. A character count would under-measure anything
//! outside ASCII:
//!
//! ```text
//! "naïve"  -> 5 chars, 6 bytes
//! "日本語"  -> 3 chars, 9 bytes
//! ```
//!
//! Rust's `str::len` already returns the byte length, so every budget check
//! in this crate goes through it and nothing else.
//!
//! ## Zero Is Not a Limit
//!
//! A zero-byte budget admits nothing, which would turn every word into its
//! own oversized chunk. [`ChunkLimit::new`] rejects it up front, so a
//! chunker can never hold one.

use std::num::NonZeroUsize;

use crate::{Error, Result};

/// Maximum chunk size in UTF-8 bytes.
///
/// # Examples
///
/// ```rust
/// use tranche::ChunkLimit;
///
/// let limit = ChunkLimit::new(512).unwrap();
/// assert_eq!(limit.get(), 512);
/// assert!(limit.admits(512));
/// assert!(!limit.admits(513));
///
/// assert!(ChunkLimit::new(0).is_err());
/// assert_eq!(ChunkLimit::default().get(), 50_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "usize", into = "usize")
)]
pub struct ChunkLimit(NonZeroUsize);

impl ChunkLimit {
    /// The limit used when the caller does not pick one: 50 000 bytes.
    pub const DEFAULT: Self = match NonZeroUsize::new(50_000) {
        Some(max) => Self(max),
        None => unreachable!(),
    };

    /// Create a limit of `max` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `max == 0`.
    pub fn new(max: usize) -> Result<Self> {
        NonZeroUsize::new(max)
            .map(Self)
            .ok_or(Error::InvalidChunkSize(max))
    }

    /// The limit in bytes.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Whether a piece of `len` bytes fits. The bound is inclusive.
    #[must_use]
    pub const fn admits(self, len: usize) -> bool {
        len <= self.get()
    }

    /// Check if adding `additional` bytes to `current` would exceed the limit.
    ///
    /// Useful for incremental chunk building.
    #[must_use]
    pub const fn would_overflow(self, current: usize, additional: usize) -> bool {
        current.saturating_add(additional) > self.get()
    }
}

impl Default for ChunkLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<NonZeroUsize> for ChunkLimit {
    fn from(max: NonZeroUsize) -> Self {
        Self(max)
    }
}

impl TryFrom<usize> for ChunkLimit {
    type Error = Error;

    fn try_from(max: usize) -> Result<Self> {
        Self::new(max)
    }
}

impl From<ChunkLimit> for usize {
    fn from(limit: ChunkLimit) -> Self {
        limit.get()
    }
}

impl std::fmt::Display for ChunkLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} bytes", self.get())
    }
}
