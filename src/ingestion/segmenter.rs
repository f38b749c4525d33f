use regex::Regex;
use std::sync::LazyLock;

/// Sentences at or below this length (in bytes) are treated as artifacts.
pub const MIN_SENTENCE_LEN: usize = 10;

/// Residual credit lines that survive front-matter stripping.
pub const CREDIT_PREFIX: &str = "produced by";

// ASCII whitespace only; NBSP and other Unicode spaces do not end a sentence.
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+[\t\n\x0C\r ]+").expect("valid regex"));

/// Splits cleaned text into sentences, in source order.
///
/// A boundary is a run of `.`, `!` or `?` followed by ASCII whitespace; the
/// boundary itself is dropped, so only a trailing unterminated fragment keeps
/// its punctuation.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_BOUNDARY
        .split(text)
        .map(str::trim)
        .filter(|sentence| is_sentence(sentence))
        .map(str::to_string)
        .collect()
}

fn is_sentence(candidate: &str) -> bool {
    candidate.len() > MIN_SENTENCE_LEN && !candidate.to_lowercase().starts_with(CREDIT_PREFIX)
}
