//! Natural text boundaries, coarsest first.
//!
//! ```text
//! paragraph   "\n" <whitespace>* "\n"     (one or more blank lines)
//! sentence    [.!?] <whitespace>+         (punctuation stays with the sentence)
//! word        <whitespace>+
//! ```
//!
//! The separators themselves are dropped. Callers re-join pieces with a
//! canonical separator (`"\n\n"` or `" "`), so the exact whitespace run
//! between two pieces never matters.
//!
//! Empty pieces are kept. A leading blank line yields an empty first
//! paragraph and a trailing `". "` yields an empty last sentence; each still
//! costs its separator in the chunk budget.

use std::sync::LazyLock;

use regex::Regex;

/// Separator re-inserted between paragraphs.
pub(crate) const PARAGRAPH_SEPARATOR: &str = "\n\n";

/// Separator re-inserted between sentences and between words.
pub(crate) const WORD_SEPARATOR: &str = " ";

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence pattern is valid"));

/// Split text into paragraphs on blank lines.
pub(crate) fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    PARAGRAPH_BREAK.split(text)
}

/// Split a paragraph into sentences.
///
/// The terminating `.`, `!` or `?` stays attached to its sentence; the
/// whitespace after it is consumed.
pub(crate) fn sentences(paragraph: &str) -> impl Iterator<Item = &str> {
    let mut start = Some(0);
    let mut ends = SENTENCE_END.find_iter(paragraph);

    std::iter::from_fn(move || {
        let from = start?;
        match ends.next() {
            Some(m) => {
                start = Some(m.end());
                // Punctuation is ASCII, one byte.
                Some(&paragraph[from..=m.start()])
            }
            None => {
                start = None;
                Some(&paragraph[from..])
            }
        }
    })
}

/// Split a sentence into whitespace-delimited words.
pub(crate) fn words(sentence: &str) -> impl Iterator<Item = &str> {
    sentence.split_whitespace()
}
