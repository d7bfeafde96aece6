// ============================================================
// Layer 4 — Vocabulary and Bag-of-Words Encoder
// ============================================================
// The vocabulary is the sorted, deduplicated set of lemmas seen
// across all training patterns. It is fitted once at training
// time and frozen afterwards: its length defines the model's
// input dimensionality, so training and inference must share
// the exact same ordered token list (persisted in the
// dimensions artifact).
//
// Encoding is binary bag-of-words: a Vec<f32> with 1.0 at each
// index whose vocabulary token appears in the input token set.
// Duplicates are ignored and order is irrelevant — only presence
// matters. Tokens not in the vocabulary contribute nothing.
//
// Reference: Rust Book §8 (Collections)

use std::collections::HashSet;

use crate::data::tokenizer::tokenize_and_lemmatize;

/// A fitted, ordered vocabulary.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    tokens: Vec<String>,
}

impl Vocabulary {
    /// Fit a vocabulary from pre-tokenized training patterns:
    /// collect every lemma, dedup, sort.
    pub fn fit(patterns: &[Vec<String>]) -> Self {
        let unique: HashSet<&String> = patterns.iter().flatten().collect();

        let mut tokens: Vec<String> = unique.into_iter().cloned().collect();
        tokens.sort();

        Self { tokens }
    }

    /// Rebuild a vocabulary from its persisted ordered token list.
    /// The order must be exactly what was saved at training time,
    /// otherwise every encoded vector is scrambled.
    pub fn from_tokens(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    /// Encode raw text into a binary bag-of-words vector.
    pub fn encode_text(&self, text: &str) -> Vec<f32> {
        self.encode(&tokenize_and_lemmatize(text))
    }

    /// Encode a token list into a binary bag-of-words vector of
    /// length `self.len()`.
    pub fn encode(&self, words: &[String]) -> Vec<f32> {
        let present: HashSet<&str> = words.iter().map(String::as_str).collect();

        self.tokens
            .iter()
            .map(|t| if present.contains(t.as_str()) { 1.0 } else { 0.0 })
            .collect()
    }

    /// Number of tokens — the model's input size.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The ordered token list, for persistence in the dimensions artifact.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_fit_sorts_and_dedups() {
        let vocab = Vocabulary::fit(&[
            toks(&["when", "fee", "switch"]),
            toks(&["fee", "advisor"]),
        ]);
        assert_eq!(vocab.tokens(), ["advisor", "fee", "switch", "when"]);
    }

    #[test]
    fn test_encode_marks_present_tokens() {
        let vocab = Vocabulary::from_tokens(toks(&["advisor", "fee", "when"]));
        assert_eq!(vocab.encode(&toks(&["when", "fee"])), vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_duplicates_and_order_ignored() {
        let vocab = Vocabulary::from_tokens(toks(&["advisor", "fee", "when"]));
        let a = vocab.encode(&toks(&["fee", "when", "fee", "fee"]));
        let b = vocab.encode(&toks(&["when", "fee"]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_unknown_tokens_encode_to_zeros() {
        let vocab = Vocabulary::from_tokens(toks(&["advisor", "fee"]));
        assert_eq!(vocab.encode(&toks(&["banana"])), vec![0.0, 0.0]);
    }

    #[test]
    fn test_encode_text_is_deterministic() {
        let vocab = Vocabulary::from_tokens(toks(&["advisor", "switch", "when"]));
        let a = vocab.encode_text("When can I switch advisors?");
        let b = vocab.encode_text("When can I switch advisors?");
        assert_eq!(a, b);
        assert_eq!(a, vec![1.0, 1.0, 1.0]);
    }
}
