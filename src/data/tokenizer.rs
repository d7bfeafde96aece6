// ============================================================
// Layer 4 — Tokenizer and Lemmatizer
// ============================================================
// Turns raw text into lowercase lemmatized tokens.
//
// Splitting uses Unicode word boundary rules (UAX #29) via the
// unicode-segmentation crate, which drops punctuation and
// whitespace for us and handles non-ASCII input correctly.
//
// Lemmatization is noun-style suffix rewriting: a small table of
// irregular plurals, then `-ies` → `-y`, `-es` after sibilants,
// and a trailing `-s` otherwise. The rules are deterministic,
// which is what the encoder contract needs — the same text must
// always produce the same tokens.
//
// The single entry point is used everywhere text becomes tokens:
// training patterns, user queries, and response templates. Using
// one function keeps vocabulary and query encodings consistent.
//
// Reference: Unicode Standard Annex #29

use unicode_segmentation::UnicodeSegmentation;

/// Irregular plural → singular pairs the suffix rules can't reach.
const IRREGULAR_PLURALS: [(&str, &str); 8] = [
    ("children", "child"),
    ("feet",     "foot"),
    ("geese",    "goose"),
    ("men",      "man"),
    ("mice",     "mouse"),
    ("people",   "person"),
    ("teeth",    "tooth"),
    ("women",    "woman"),
];

/// Tokenize `text` into lowercase lemmas.
///
/// Order is preserved and duplicates are kept — callers that need
/// set semantics (the encoder, the responder) build their own sets.
pub fn tokenize_and_lemmatize(text: &str) -> Vec<String> {
    text.unicode_words()
        .map(|w| lemmatize(&w.to_lowercase()))
        .collect()
}

/// Reduce a lowercase word to its dictionary base form.
fn lemmatize(word: &str) -> String {
    if let Some((_, singular)) = IRREGULAR_PLURALS.iter().find(|(p, _)| *p == word) {
        return (*singular).to_string();
    }

    let n = word.len();

    // policies → policy
    if n > 3 && word.ends_with("ies") {
        return format!("{}y", &word[..n - 3]);
    }

    // classes → class, boxes → box, quizzes → quizze is avoided by
    // stripping only the "es" after a sibilant ending
    if n > 3
        && (word.ends_with("ses")
            || word.ends_with("xes")
            || word.ends_with("zes")
            || word.ends_with("ches")
            || word.ends_with("shes"))
    {
        return word[..n - 2].to_string();
    }

    // fees → fee, advisors → advisor — but leave "class", "bonus", "this"
    if n > 2 && word.ends_with('s')
        && !word.ends_with("ss")
        && !word.ends_with("us")
        && !word.ends_with("is")
    {
        return word[..n - 1].to_string();
    }

    word.to_string()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_splits_on_punctuation() {
        assert_eq!(
            tokenize_and_lemmatize("When, exactly?!"),
            vec!["when", "exactly"]
        );
    }

    #[test]
    fn test_strips_plural_s() {
        assert_eq!(tokenize_and_lemmatize("fees"), vec!["fee"]);
        assert_eq!(tokenize_and_lemmatize("advisors"), vec!["advisor"]);
    }

    #[test]
    fn test_ies_becomes_y() {
        assert_eq!(tokenize_and_lemmatize("policies"), vec!["policy"]);
    }

    #[test]
    fn test_sibilant_es() {
        assert_eq!(tokenize_and_lemmatize("classes boxes"), vec!["class", "box"]);
    }

    #[test]
    fn test_protected_endings_survive() {
        // -ss, -us, -is words are not plurals
        assert_eq!(
            tokenize_and_lemmatize("class bonus this"),
            vec!["class", "bonus", "this"]
        );
    }

    #[test]
    fn test_irregular_plural() {
        assert_eq!(tokenize_and_lemmatize("people"), vec!["person"]);
    }

    #[test]
    fn test_deterministic() {
        let a = tokenize_and_lemmatize("When can I switch advisors?");
        let b = tokenize_and_lemmatize("When can I switch advisors?");
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize_and_lemmatize("").is_empty());
    }
}
