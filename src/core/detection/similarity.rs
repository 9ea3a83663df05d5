//! Tokenization, normalization and similarity scoring
//!
//! The comparison key for fuzzy keyword matching is built by lowercasing a
//! token and stripping punctuation that commonly clings to OCR output.
//! Keywords themselves are only lowercased (at rule-compile time), so
//! `"PASSWORD,"` scores 100 against the keyword `password` while the matched
//! value reported to the caller stays the original token.

/// Characters stripped from tokens before comparison
const STRIP_CHARS: [char; 5] = ['.', '\'', '-', '_', ','];

/// Tokens shorter than this many characters never participate in keyword
/// matching
pub const MIN_TOKEN_LEN: usize = 2;

/// Split text into the tokens used for keyword matching
///
/// Whitespace-separated, with tokens shorter than [`MIN_TOKEN_LEN`]
/// discarded. Called once per scanned text and reused for every keyword
/// category.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .collect()
}

/// Normalize a token into its comparison key
pub fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .chars()
        .filter(|c| !STRIP_CHARS.contains(c))
        .collect()
}

/// Similarity of two strings on a 0-100 scale
///
/// Sorensen-Dice coefficient over character bigrams: symmetric and based on
/// matching contiguous subsequences, so transpositions and partial overlaps
/// score proportionally. Identical strings score 100.
pub fn similarity(a: &str, b: &str) -> f64 {
    strsim::sorensen_dice(a, b) * 100.0
}
