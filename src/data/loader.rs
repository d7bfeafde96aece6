// ============================================================
// Layer 4 — Intent Dataset Loader
// ============================================================
// Loads the intents dataset from a JSON file of the shape
//
//   {"intents": [
//       {"tag": "...", "patterns": ["..."], "responses": ["..."]}
//   ]}
//
// serde deserializes the file straight into the domain structs,
// then the loader validates what the rest of the system relies
// on: every intent has at least one pattern (otherwise it can't
// be trained) and at least one response (otherwise the responder
// has nothing to select from).
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use std::fs;

use crate::domain::intent::{Intent, IntentFile};
use crate::domain::traits::IntentSource;

/// Loads intents from a JSON dataset file.
/// Implements the IntentSource trait from Layer 3.
pub struct IntentLoader {
    /// Path to the dataset JSON file
    path: String,
}

impl IntentLoader {
    /// Create a new IntentLoader pointed at a dataset file
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl IntentSource for IntentLoader {
    fn load_all(&self) -> Result<Vec<Intent>> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read dataset '{}'", self.path))?;

        let file: IntentFile = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed intents JSON in '{}'", self.path))?;

        if file.intents.is_empty() {
            bail!("Dataset '{}' contains no intents", self.path);
        }

        // Validate the invariants the pipeline depends on
        for intent in &file.intents {
            if intent.patterns.is_empty() {
                bail!("Intent '{}' has no training patterns", intent.tag);
            }
            if intent.responses.is_empty() {
                bail!("Intent '{}' has no responses", intent.tag);
            }
        }

        tracing::info!("Loaded {} intents from '{}'", file.intents.len(), self.path);
        Ok(file.intents)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_dataset(json: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(json.as_bytes()).unwrap();
        f
    }

    #[test]
    fn test_loads_valid_dataset() {
        let f = write_dataset(
            r#"{"intents": [
                {"tag": "fees", "patterns": ["what are the fees"],
                 "responses": ["The fee is R500."]}
            ]}"#,
        );
        let intents = IntentLoader::new(f.path().to_str().unwrap())
            .load_all()
            .unwrap();
        assert_eq!(intents.len(), 1);
        assert_eq!(intents[0].tag, "fees");
    }

    #[test]
    fn test_rejects_intent_without_responses() {
        let f = write_dataset(
            r#"{"intents": [
                {"tag": "empty", "patterns": ["hi"], "responses": []}
            ]}"#,
        );
        let err = IntentLoader::new(f.path().to_str().unwrap())
            .load_all()
            .unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let f = write_dataset("{not json");
        assert!(IntentLoader::new(f.path().to_str().unwrap())
            .load_all()
            .is_err());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(IntentLoader::new("no/such/file.json").load_all().is_err());
    }
}
