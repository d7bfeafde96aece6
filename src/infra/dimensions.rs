// ============================================================
// Layer 6 — Dimensions Artifact
// ============================================================
// The dimensions artifact is everything inference needs besides
// the weights: the fitted vocabulary (which fixes the encoding
// and the input size), the ordered intent list (which maps the
// classifier's output index back to a tag), and the responses
// registered per intent.
//
// The JSON key names are part of the artifact's contract:
//   vocabulary, intents, intents_responses, input_size, output_size
//
// Written once at the end of training; read-only afterwards.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{bail, Context, Result};
use std::{collections::BTreeMap, fs, path::PathBuf};
use serde::{Deserialize, Serialize};

const DIMENSIONS_FILE: &str = "dimensions.json";

/// The persisted mapping between text, intents, and model shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimensions {
    /// Ordered vocabulary — index i of an encoded vector refers
    /// to vocabulary[i]
    pub vocabulary: Vec<String>,

    /// Intent tags in training order — the classifier's output
    /// index i refers to intents[i]
    pub intents: Vec<String>,

    /// Canned responses per intent tag, in registered order
    pub intents_responses: BTreeMap<String, Vec<String>>,

    /// Model input size — always equals vocabulary.len()
    pub input_size: usize,

    /// Model output size — always equals intents.len()
    pub output_size: usize,
}

impl Dimensions {
    /// Look up the responses for the intent at a classifier output index.
    pub fn responses_for(&self, index: usize) -> Option<(&str, &[String])> {
        let tag = self.intents.get(index)?;
        let responses = self.intents_responses.get(tag)?;
        Some((tag, responses))
    }
}

/// Persists and restores the dimensions artifact as JSON in the
/// checkpoint directory.
pub struct DimensionsStore {
    dir: PathBuf,
}

impl DimensionsStore {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: PathBuf::from(dir.into()) }
    }

    /// Write dimensions.json, creating the directory if needed.
    pub fn save(&self, dims: &Dimensions) -> Result<()> {
        fs::create_dir_all(&self.dir).ok();
        let path = self.dir.join(DIMENSIONS_FILE);

        fs::write(&path, serde_json::to_string(dims)?)
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::info!(
            "Saved dimensions: {} vocabulary tokens, {} intents",
            dims.vocabulary.len(),
            dims.intents.len(),
        );
        Ok(())
    }

    /// Read dimensions.json back. Fails with a pointer at `train`
    /// when the artifact doesn't exist yet.
    pub fn load(&self) -> Result<Dimensions> {
        let path = self.dir.join(DIMENSIONS_FILE);

        let raw = fs::read_to_string(&path)
            .with_context(|| {
                format!(
                    "Cannot read '{}'. Make sure you have run 'train' first.",
                    path.display()
                )
            })?;

        let dims: Dimensions = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed dimensions in '{}'", path.display()))?;

        // The sizes are derived data — catch a hand-edited artifact early
        if dims.input_size != dims.vocabulary.len() {
            bail!(
                "Dimensions mismatch: input_size={} but vocabulary has {} tokens",
                dims.input_size,
                dims.vocabulary.len(),
            );
        }
        if dims.output_size != dims.intents.len() {
            bail!(
                "Dimensions mismatch: output_size={} but {} intents are listed",
                dims.output_size,
                dims.intents.len(),
            );
        }

        Ok(dims)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dimensions {
        let mut responses = BTreeMap::new();
        responses.insert(
            "fees".to_string(),
            vec!["The fee is R500.".to_string()],
        );
        Dimensions {
            vocabulary:        vec!["fee".to_string(), "what".to_string()],
            intents:           vec!["fees".to_string()],
            intents_responses: responses,
            input_size:        2,
            output_size:       1,
        }
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = DimensionsStore::new(dir.path().to_str().unwrap());

        store.save(&sample()).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.vocabulary, sample().vocabulary);
        assert_eq!(loaded.intents, sample().intents);
        assert_eq!(loaded.input_size, 2);
        assert_eq!(loaded.output_size, 1);
    }

    #[test]
    fn test_exact_json_keys() {
        // The key names are an external contract
        let json = serde_json::to_value(sample()).unwrap();
        for key in [
            "vocabulary",
            "intents",
            "intents_responses",
            "input_size",
            "output_size",
        ] {
            assert!(json.get(key).is_some(), "missing key '{key}'");
        }
    }

    #[test]
    fn test_rejects_inconsistent_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let store = DimensionsStore::new(dir.path().to_str().unwrap());

        let mut dims = sample();
        dims.input_size = 99;
        store.save(&dims).unwrap();

        assert!(store.load().is_err());
    }

    #[test]
    fn test_missing_artifact_mentions_train() {
        let dir = tempfile::tempdir().unwrap();
        let store = DimensionsStore::new(dir.path().to_str().unwrap());
        let err = store.load().unwrap_err();
        assert!(format!("{err:#}").contains("train"));
    }

    #[test]
    fn test_responses_for_maps_index_to_tag() {
        let dims = sample();
        let (tag, responses) = dims.responses_for(0).unwrap();
        assert_eq!(tag, "fees");
        assert_eq!(responses.len(), 1);
        assert!(dims.responses_for(1).is_none());
    }
}
