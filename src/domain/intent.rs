// ============================================================
// Layer 3 — Intent Domain Type
// ============================================================
// Represents one labelled category of user request:
//   - a tag (the label the classifier predicts)
//   - example patterns the classifier is trained on
//   - canned responses the responder chooses between
//
// The serde derives match the on-disk dataset format directly,
// so the loader can deserialize the file into these structs
// without an intermediate representation.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// A single intent: a tag plus its training patterns and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intent {
    /// The label predicted by the classifier, e.g. "fees"
    pub tag: String,

    /// Example phrasings used as training samples
    pub patterns: Vec<String>,

    /// Canned response templates the responder selects from
    pub responses: Vec<String>,
}

impl Intent {
    pub fn new(
        tag:       impl Into<String>,
        patterns:  Vec<String>,
        responses: Vec<String>,
    ) -> Self {
        Self { tag: tag.into(), patterns, responses }
    }
}

/// The top-level shape of the intents dataset file:
/// `{"intents": [ ... ]}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentFile {
    pub intents: Vec<Intent>,
}
