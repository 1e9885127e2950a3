//! Boundary-hierarchy chunking: paragraphs, then sentences, then words.
//!
//! ## The Algorithm
//!
//! Given a limit of `100` bytes:
//!
//! ```text
//! 1. Whole text <= 100 bytes?  Return it untouched.
//! 2. Pack paragraphs into a buffer, joined by "\n\n".
//!    - Next paragraph doesn't fit, but fits alone: flush, start a new buffer.
//!    - Next paragraph is > 100 bytes by itself: flush, then pack its
//!      sentences into the same buffer, joined by " ".
//! 3. A sentence > 100 bytes by itself: flush, then pack its words.
//! 4. A word > 100 bytes by itself becomes its own chunk. Words are never cut.
//! ```
//!
//! Separators count toward the budget of the buffer they are appended to.
//! Chunks are trimmed when flushed; the live buffer is not.
//!
//! After a paragraph has been broken into sentences, its last partial
//! buffer stays open, so the next paragraph can still join it.
//!
//! ## Degenerate Case
//!
//! ```text
//! limit = 10
//! text  = "supercalifragilistic is long"
//!
//! Chunks: ["supercalifragilistic", "is long"]
//!            ^ 20 bytes, over the limit but atomic
//! ```

use crate::boundary::{self, PARAGRAPH_SEPARATOR, WORD_SEPARATOR};
use crate::{ChunkLimit, Chunker, Result};

/// Splits text at the coarsest natural boundary that keeps chunks under a
/// byte limit.
///
/// ## Example
///
/// ```rust
/// use tranche::{BoundaryChunker, Chunker};
///
/// let chunker = BoundaryChunker::new(40).unwrap();
/// let text = "Short intro.\n\nThe second paragraph is long. It has two sentences.";
/// let chunks = chunker.split(text);
///
/// assert_eq!(
///     chunks,
///     ["Short intro.", "The second paragraph is long.", "It has two sentences."]
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BoundaryChunker {
    max_chunk_size: ChunkLimit,
}

impl BoundaryChunker {
    /// Create a chunker with a limit of `max_chunk_size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`](crate::Error::InvalidChunkSize)
    /// if `max_chunk_size == 0`.
    pub fn new(max_chunk_size: usize) -> Result<Self> {
        ChunkLimit::new(max_chunk_size).map(Self::with_limit)
    }

    /// Create a chunker from an already validated limit.
    #[must_use]
    pub const fn with_limit(max_chunk_size: ChunkLimit) -> Self {
        Self { max_chunk_size }
    }

    /// The configured limit.
    #[must_use]
    pub const fn limit(&self) -> ChunkLimit {
        self.max_chunk_size
    }
}

impl Chunker for BoundaryChunker {
    #[tracing::instrument(
        level = "debug",
        name = "split_text",
        skip_all,
        fields(bytes = text.len(), limit = self.max_chunk_size.get())
    )]
    fn split(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return vec![String::new()];
        }
        if self.max_chunk_size.admits(text.len()) {
            return vec![text.to_owned()];
        }

        let mut acc = Accumulator::new(self.max_chunk_size);
        for paragraph in boundary::paragraphs(text) {
            acc.push_paragraph(paragraph);
        }
        let chunks = acc.finish();

        tracing::debug!(chunks = chunks.len(), "split text");
        chunks
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        text_len.div_ceil(self.max_chunk_size.get()).max(1)
    }
}

/// Running buffer plus the chunks flushed so far.
struct Accumulator {
    limit: ChunkLimit,
    buffer: String,
    chunks: Vec<String>,
}

impl Accumulator {
    fn new(limit: ChunkLimit) -> Self {
        Self {
            limit,
            buffer: String::new(),
            chunks: Vec::new(),
        }
    }

    fn push_paragraph(&mut self, paragraph: &str) {
        if self.fits(paragraph, PARAGRAPH_SEPARATOR) {
            self.append(paragraph, PARAGRAPH_SEPARATOR);
            return;
        }

        self.flush();
        if self.limit.admits(paragraph.len()) {
            self.append(paragraph, PARAGRAPH_SEPARATOR);
            return;
        }

        tracing::debug!(
            bytes = paragraph.len(),
            "paragraph exceeds limit, splitting on sentences"
        );
        for sentence in boundary::sentences(paragraph) {
            self.push_sentence(sentence);
        }
    }

    fn push_sentence(&mut self, sentence: &str) {
        if self.fits(sentence, WORD_SEPARATOR) {
            self.append(sentence, WORD_SEPARATOR);
            return;
        }

        self.flush();
        if self.limit.admits(sentence.len()) {
            self.append(sentence, WORD_SEPARATOR);
            return;
        }

        tracing::debug!(
            bytes = sentence.len(),
            "sentence exceeds limit, splitting on words"
        );
        for word in boundary::words(sentence) {
            self.push_word(word);
        }
    }

    fn push_word(&mut self, word: &str) {
        if !self.fits(word, WORD_SEPARATOR) {
            self.flush();
            if !self.limit.admits(word.len()) {
                tracing::trace!(
                    bytes = word.len(),
                    limit = self.limit.get(),
                    overrun = word.len() - self.limit.get(),
                    "word exceeds limit, keeping it whole"
                );
            }
        }
        self.append(word, WORD_SEPARATOR);
    }

    fn fits(&self, piece: &str, separator: &str) -> bool {
        !self
            .limit
            .would_overflow(self.buffer.len(), piece.len() + separator.len())
    }

    fn append(&mut self, piece: &str, separator: &str) {
        self.buffer.push_str(piece);
        self.buffer.push_str(separator);
    }

    /// Emit the buffer as a trimmed chunk, unless it is blank.
    fn flush(&mut self) {
        let chunk = self.buffer.trim();
        if !chunk.is_empty() {
            self.chunks.push(chunk.to_owned());
        }
        self.buffer.clear();
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.chunks.retain(|c| !c.trim().is_empty());
        if self.chunks.is_empty() {
            self.chunks.push(String::new());
        }
        self.chunks
    }
}
