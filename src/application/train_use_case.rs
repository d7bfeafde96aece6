// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates the full training pipeline in order:
//
//   Step 1: Load the intents dataset     (Layer 4 - data)
//   Step 2: Tokenize + lemmatize patterns (Layer 4 - data)
//   Step 3: Fit the vocabulary           (Layer 4 - data)
//   Step 4: Encode bag-of-words samples  (Layer 4 - data)
//   Step 5: Persist the dimensions       (Layer 6 - infra)
//   Step 6: Save config                  (Layer 6 - infra)
//   Step 7: Run training loop            (Layer 5 - ml)
//
// Reference: Burn Book §5 (Training)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::data::{
    dataset::{BowDataset, BowSample},
    loader::IntentLoader,
    tokenizer::tokenize_and_lemmatize,
    vocabulary::Vocabulary,
};
use crate::domain::intent::Intent;
use crate::domain::traits::IntentSource;
use crate::infra::{
    checkpoint::CheckpointManager,
    dimensions::{Dimensions, DimensionsStore},
    metrics::MetricsLogger,
};
use crate::ml::model::IntentModelConfig;
use crate::ml::trainer::run_training;

// ─── Training Configuration ──────────────────────────────────────────────────
// All hyperparameters for a training run.
// Serialisable so it can be saved next to the checkpoint as a
// record of how the weights were produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub dataset:        String,
    pub checkpoint_dir: String,
    pub batch_size:     usize,
    pub epochs:         usize,
    pub lr:             f64,
    pub patience:       usize,
    pub dropout:        f64,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            dataset:        "data/intents.json".to_string(),
            checkpoint_dir: "checkpoints".to_string(),
            batch_size:     16,
            epochs:         500,
            lr:             5e-5,
            patience:       75,
            dropout:        0.3,
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
// Owns the config and runs the full training pipeline.
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    /// Create a new TrainUseCase with the given configuration
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Execute the full training pipeline end to end
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        // ── Step 1: Load the intents dataset ─────────────────────────────────
        let loader  = IntentLoader::new(&cfg.dataset);
        let intents = loader.load_all()?;

        // ── Step 2: Tokenize and lemmatize every pattern ──────────────────────
        // Each pattern becomes one training sample labelled with the
        // index of its intent, in dataset order.
        let mut pattern_tokens: Vec<Vec<String>> = Vec::new();
        let mut pattern_labels: Vec<usize>       = Vec::new();

        for (label, intent) in intents.iter().enumerate() {
            for pattern in &intent.patterns {
                pattern_tokens.push(tokenize_and_lemmatize(pattern));
                pattern_labels.push(label);
            }
        }
        tracing::info!(
            "{} training patterns across {} intents",
            pattern_tokens.len(),
            intents.len(),
        );

        // ── Step 3: Fit the vocabulary ────────────────────────────────────────
        // Sorted + deduplicated lemmas; its length fixes the input size.
        let vocabulary = Vocabulary::fit(&pattern_tokens);
        tracing::info!("Vocabulary fitted: {} tokens", vocabulary.len());

        // ── Step 4: Encode bag-of-words samples ───────────────────────────────
        let samples: Vec<BowSample> = pattern_tokens
            .iter()
            .zip(&pattern_labels)
            .map(|(tokens, &label)| BowSample {
                bag: vocabulary.encode(tokens),
                label,
            })
            .collect();
        let dataset = BowDataset::new(samples);

        // ── Step 5: Persist the dimensions artifact ───────────────────────────
        // Everything inference needs besides the weights.
        let dims = build_dimensions(&vocabulary, &intents);
        DimensionsStore::new(&cfg.checkpoint_dir).save(&dims)?;

        // ── Step 6: Save config for provenance ────────────────────────────────
        let ckpt_manager = CheckpointManager::new(&cfg.checkpoint_dir);
        ckpt_manager.save_config(cfg)?;

        // ── Step 7: Run training loop (Layer 5) ───────────────────────────────
        let model_cfg = IntentModelConfig::new(dims.input_size, dims.output_size)
            .with_dropout(cfg.dropout);
        let metrics = MetricsLogger::new(&cfg.checkpoint_dir)?;
        run_training(cfg, &model_cfg, dataset, ckpt_manager, metrics)?;

        Ok(())
    }
}

/// Assemble the dimensions artifact from the fitted vocabulary and
/// the loaded intents, preserving dataset order for the intent list.
fn build_dimensions(vocabulary: &Vocabulary, intents: &[Intent]) -> Dimensions {
    let tags: Vec<String> = intents.iter().map(|i| i.tag.clone()).collect();

    let responses: BTreeMap<String, Vec<String>> = intents
        .iter()
        .map(|i| (i.tag.clone(), i.responses.clone()))
        .collect();

    Dimensions {
        input_size:        vocabulary.len(),
        output_size:       tags.len(),
        vocabulary:        vocabulary.tokens().to_vec(),
        intents:           tags,
        intents_responses: responses,
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn intent(tag: &str, patterns: &[&str], responses: &[&str]) -> Intent {
        Intent::new(
            tag,
            patterns.iter().map(|s| s.to_string()).collect(),
            responses.iter().map(|s| s.to_string()).collect(),
        )
    }

    #[test]
    fn test_build_dimensions_preserves_intent_order() {
        let intents = vec![
            intent("zeta", &["bye"], &["Goodbye!"]),
            intent("alpha", &["hi"], &["Hello!"]),
        ];
        let tokens: Vec<Vec<String>> = intents
            .iter()
            .flat_map(|i| i.patterns.iter().map(|p| tokenize_and_lemmatize(p)))
            .collect();
        let vocab = Vocabulary::fit(&tokens);

        let dims = build_dimensions(&vocab, &intents);

        // Dataset order, NOT alphabetical — output index 0 must mean "zeta"
        assert_eq!(dims.intents, ["zeta", "alpha"]);
        assert_eq!(dims.input_size, vocab.len());
        assert_eq!(dims.output_size, 2);
        assert_eq!(dims.intents_responses["alpha"], ["Hello!"]);
    }
}
