//! The Slab type: a chunk of text with its sequence position.

use crate::ChunkLimit;

/// A chunk of text and its position in the chunk sequence.
///
/// Chunks are trimmed and paragraph breaks are normalised, so a slab does not
/// map back to a byte range of the source. The `index` is what an ingestion
/// pipeline stores next to the embedding, together with its own document id.
///
/// ```rust
/// use tranche::{BoundaryChunker, Chunker};
///
/// let chunker = BoundaryChunker::new(16).unwrap();
/// let slabs = chunker.chunk("First part.\n\nSecond part.");
///
/// assert_eq!(slabs.len(), 2);
/// assert_eq!(slabs[1].index, 1);
/// assert_eq!(slabs[1].text, "Second part.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slab {
    /// The chunk text.
    pub text: String,
    /// Zero-based index of this chunk in the sequence.
    pub index: usize,
}

impl Slab {
    /// Create a new slab.
    #[must_use]
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// The length of this chunk in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether this chunk is empty.
    ///
    /// Only the placeholder chunk of a blank document is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether this chunk is over `limit`, which only a single oversized word
    /// can be.
    #[must_use]
    pub fn exceeds(&self, limit: ChunkLimit) -> bool {
        !limit.admits(self.len())
    }
}

impl std::fmt::Display for Slab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Slab {{ index: {}, len: {} }}", self.index, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exceeds() {
        let limit = ChunkLimit::new(4).unwrap();
        assert!(!Slab::new("abcd", 0).exceeds(limit));
        assert!(Slab::new("abcde", 0).exceeds(limit));
    }

    #[test]
    fn test_display() {
        let slab = Slab::new("héllo", 3);
        assert_eq!(slab.to_string(), "Slab { index: 3, len: 6 }");
    }
}
