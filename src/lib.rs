//! # tranche
//!
//! Boundary-aware text chunking for document ingestion.
//!
//! ## The Problem
//!
//! Text extracted from an uploaded PDF or DOCX can run to megabytes. Embedding
//! providers take a few kilobytes per request. Something has to cut the text
//! up, and where it cuts decides how good the embeddings are:
//!
//! - A paragraph split mid-argument loses coherence
//! - A sentence split mid-clause is noise
//! - A word split mid-token is garbage
//!
//! ## The Approach
//!
//! Pack the largest pieces that fit. Only break a piece apart when it cannot
//! fit on its own, and then only one level down:
//!
//! ```text
//! paragraphs  "\n\n"      packed while they fit
//!   sentences ". " "! " "? "   only inside an oversized paragraph
//!     words   " "         only inside an oversized sentence
//! ```
//!
//! A single word larger than the limit is emitted whole. It is the one case
//! where a chunk may exceed the limit.
//!
//! The limit is in UTF-8 bytes, the unit embedding APIs actually enforce.
//!
//! ## Quick Start
//!
//! ```rust
//! use tranche::{chunk_text, chunk_text_default};
//!
//! let text = "First paragraph.\n\nSecond paragraph, a little longer.";
//!
//! // Fits in the default 50 000 bytes: returned as-is.
//! assert_eq!(chunk_text_default(text), [text]);
//!
//! // A tighter limit splits at the paragraph break.
//! let chunks = chunk_text(text, 40)?;
//! assert_eq!(chunks, ["First paragraph.", "Second paragraph, a little longer."]);
//! # Ok::<(), tranche::Error>(())
//! ```
//!
//! ## Guarantees
//!
//! - The result is never empty. Blank input gives `[""]`.
//! - Text within the limit comes back unmodified, untrimmed.
//! - Every other chunk is trimmed and non-blank.
//! - Chunks keep source order and drop no words.
//! - Chunking is pure: no I/O, no shared state, safe from any thread.
//!
//! ## Logging
//!
//! Splitting emits [`tracing`] events at `debug` and `trace` level. No
//! subscriber is installed by the library.

mod boundary;
mod error;
mod hierarchy;
mod limit;
mod slab;

pub use error::{Error, Result};
pub use hierarchy::BoundaryChunker;
pub use limit::ChunkLimit;
pub use slab::Slab;

/// A text chunking strategy.
///
/// ```rust
/// use tranche::{BoundaryChunker, Chunker, Slab};
///
/// fn ingest(chunker: &dyn Chunker, document: &str) -> Vec<Slab> {
///     chunker.chunk(document)
/// }
///
/// let slabs = ingest(&BoundaryChunker::default(), "Hello world.");
/// assert_eq!(slabs, [Slab::new("Hello world.", 0)]);
/// ```
pub trait Chunker: Send + Sync {
    /// Split text into an ordered, never empty, sequence of chunks.
    fn split(&self, text: &str) -> Vec<String>;

    /// Split text into chunks tagged with their sequence index.
    fn chunk(&self, text: &str) -> Vec<Slab> {
        self.split(text)
            .into_iter()
            .enumerate()
            .map(|(index, text)| Slab::new(text, index))
            .collect()
    }

    /// Estimate the number of chunks for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Conservative default
        (text_len / 500).max(1)
    }
}

/// Split `text` into chunks of at most `max_chunk_size` UTF-8 bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidChunkSize`] if `max_chunk_size == 0`.
pub fn chunk_text(text: &str, max_chunk_size: usize) -> Result<Vec<String>> {
    BoundaryChunker::new(max_chunk_size).map(|chunker| chunker.split(text))
}

/// Split `text` with the default limit of [`ChunkLimit::DEFAULT`].
pub fn chunk_text_default(text: &str) -> Vec<String> {
    BoundaryChunker::default().split(text)
}
