//! Property-based tests for boundary chunking.
//!
//! These tests verify that chunking maintains key invariants:
//! - Never empty: there is always at least one chunk
//! - Non-blank: chunks are trimmed and non-empty (except the `[""]` case)
//! - Bounded: chunks fit the limit unless they are a single word
//! - Lossless: the words of the input appear, in order, in the output

use proptest::prelude::*;
use tranche::{BoundaryChunker, Chunker};

// =============================================================================
// Test Generators
// =============================================================================

/// Generate a string of arbitrary printable text and whitespace.
fn arbitrary_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Zé日 .!?\n\t]{0,400}").unwrap()
}

/// Generate text with paragraph and sentence structure.
fn document_like_text() -> impl Strategy<Value = String> {
    let word = prop::string::string_regex("[A-Za-zé語]{1,15}").unwrap();
    let separator = prop_oneof![
        6 => Just(" "),
        2 => Just(". "),
        1 => Just("! "),
        1 => Just("? "),
        1 => Just(".\n\n"),
        1 => Just("\n \n\n"),
        1 => Just("\n"),
    ];
    prop::collection::vec((word, separator), 1..120).prop_map(|pieces| {
        pieces
            .into_iter()
            .map(|(word, sep)| format!("{word}{sep}"))
            .collect()
    })
}

// =============================================================================
// Invariant Helpers
// =============================================================================

fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

fn chunk_words(chunks: &[String]) -> Vec<&str> {
    chunks.iter().flat_map(|c| c.split_whitespace()).collect()
}

fn within_limit_or_atomic(chunk: &str, max: usize) -> bool {
    chunk.len() <= max || !chunk.contains(char::is_whitespace)
}

// =============================================================================
// Invariants
// =============================================================================

proptest! {
    #[test]
    fn never_empty(text in arbitrary_text(), max in 1usize..200) {
        let chunks = BoundaryChunker::new(max).unwrap().split(&text);
        prop_assert!(!chunks.is_empty());
    }

    #[test]
    fn chunks_are_non_blank(text in document_like_text(), max in 1usize..200) {
        let chunks = BoundaryChunker::new(max).unwrap().split(&text);
        if text.trim().is_empty() {
            prop_assert_eq!(chunks, vec![String::new()]);
        } else {
            for chunk in &chunks {
                prop_assert!(!chunk.trim().is_empty(), "blank chunk in {:?}", chunks);
            }
        }
    }

    #[test]
    fn chunks_respect_limit(text in document_like_text(), max in 1usize..200) {
        let chunks = BoundaryChunker::new(max).unwrap().split(&text);
        for chunk in &chunks {
            prop_assert!(
                within_limit_or_atomic(chunk, max),
                "Chunk of {} bytes exceeds max {}: {:?}",
                chunk.len(),
                max,
                chunk
            );
        }
    }

    #[test]
    fn flushed_chunks_are_trimmed(text in document_like_text(), max in 1usize..200) {
        prop_assume!(text.len() > max);
        let chunks = BoundaryChunker::new(max).unwrap().split(&text);
        for chunk in &chunks {
            prop_assert_eq!(chunk.trim(), chunk.as_str());
        }
    }

    #[test]
    fn words_preserved_in_order(text in document_like_text(), max in 1usize..200) {
        let chunks = BoundaryChunker::new(max).unwrap().split(&text);
        prop_assert_eq!(chunk_words(&chunks), words(&text));
    }

    #[test]
    fn words_preserved_arbitrary(text in arbitrary_text(), max in 1usize..64) {
        let chunks = BoundaryChunker::new(max).unwrap().split(&text);
        prop_assert_eq!(chunk_words(&chunks), words(&text));
    }

    #[test]
    fn fitting_text_returned_verbatim(text in arbitrary_text()) {
        prop_assume!(!text.trim().is_empty());
        let chunks = BoundaryChunker::new(text.len()).unwrap().split(&text);
        prop_assert_eq!(chunks, vec![text]);
    }

    #[test]
    fn slabs_are_indexed(text in document_like_text(), max in 1usize..200) {
        let slabs = BoundaryChunker::new(max).unwrap().chunk(&text);
        for (i, slab) in slabs.iter().enumerate() {
            prop_assert_eq!(slab.index, i);
        }
    }
}

// =============================================================================
// Consistency Tests
// =============================================================================

#[test]
fn chunking_is_deterministic() {
    let text = "The quick brown fox jumps over the lazy dog. Pack my box.\n\n".repeat(20);

    let chunker = BoundaryChunker::new(120).unwrap();
    assert_eq!(chunker.split(&text), chunker.split(&text));
}
