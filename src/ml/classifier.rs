// ============================================================
// Layer 5 — Intent Classifier (inference)
// ============================================================
use anyhow::Result;
use burn::prelude::*;

use crate::infra::checkpoint::CheckpointManager;
use crate::ml::model::{IntentModel, IntentModelConfig};

type InferBackend = burn::backend::NdArray;

/// Predictions with a top probability below this are treated as
/// "don't know" and answered with the fixed fallback string.
pub const CONFIDENCE_THRESHOLD: f32 = 0.7;

/// The outcome of classifying one encoded message.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    /// Index into the persisted intent list
    pub index: usize,

    /// Softmax probability of the predicted intent
    pub confidence: f32,
}

impl Prediction {
    /// Whether this prediction clears the confidence threshold.
    /// A NaN confidence compares false and falls back.
    pub fn is_confident(&self) -> bool {
        self.confidence >= CONFIDENCE_THRESHOLD
    }
}

pub struct IntentClassifier {
    model:  IntentModel<InferBackend>,
    device: burn::backend::ndarray::NdArrayDevice,
}

impl IntentClassifier {
    /// Rebuild the fixed architecture for the persisted dimensions and
    /// load the best checkpointed weights into it.
    /// Dropout is configured to 0.0 — it is inert at inference anyway,
    /// but this keeps the intent explicit.
    pub fn from_checkpoint(
        ckpt_manager: &CheckpointManager,
        input_size:   usize,
        output_size:  usize,
    ) -> Result<Self> {
        let device = burn::backend::ndarray::NdArrayDevice::default();

        let model_cfg = IntentModelConfig::new(input_size, output_size)
            .with_dropout(0.0);
        let model: IntentModel<InferBackend> = model_cfg.init(&device);
        let model = ckpt_manager.load_model(model, &device)?;

        tracing::info!("Model loaded from checkpoint ({input_size}→{output_size})");
        Ok(Self { model, device })
    }

    /// Classify one bag-of-words vector: forward pass, softmax,
    /// pick the most probable intent.
    pub fn predict(&self, bag: &[f32]) -> Result<Prediction> {
        let input = Tensor::<InferBackend, 1>::from_floats(bag, &self.device)
            .unsqueeze::<2>();

        // Batch of one: shape [1, output_size]. into_data() flattens,
        // so the probability vector can be read out directly.
        let logits = self.model.forward(input);
        let probs: Vec<f32> = burn::tensor::activation::softmax(logits, 1)
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| anyhow::anyhow!("Cannot read probabilities: {e:?}"))?;

        // Rust-side argmax over the probability vector
        let (index, confidence) = probs
            .iter()
            .copied()
            .enumerate()
            .fold((0usize, f32::NEG_INFINITY), |best, (i, p)| {
                if p > best.1 { (i, p) } else { best }
            });

        tracing::debug!("Predicted intent index {} (confidence {:.4})", index, confidence);
        Ok(Prediction { index, confidence })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_threshold_is_not_confident() {
        let p = Prediction { index: 0, confidence: 0.69 };
        assert!(!p.is_confident());
    }

    #[test]
    fn test_at_threshold_is_confident() {
        // The gate is `confidence < 0.7` → exactly 0.7 passes
        let p = Prediction { index: 0, confidence: 0.7 };
        assert!(p.is_confident());
    }

    #[test]
    fn test_nan_confidence_is_not_confident() {
        let p = Prediction { index: 0, confidence: f32::NAN };
        assert!(!p.is_confident());
    }
}
