//! Splitting a line of input into canonical tokens.

use cv_core::SynonymTable;

/// Splits `input` on whitespace, upper-cases each word, and replaces aliases
/// with their canonical word (one substitution per word).
pub fn tokenize(input: &str, synonyms: &SynonymTable) -> Vec<String> {
    input
        .split_whitespace()
        .map(|word| synonyms.canonical(word))
        .collect()
}
