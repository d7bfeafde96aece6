// ============================================================
// Layer 2 — Chat Context
// ============================================================
// The one inference pipeline behind both front-ends:
//
//   message → tokenize/lemmatize → bag-of-words → classifier
//           → confidence gate → responder → reply string
//
// ChatContext is constructed once at startup from the checkpoint
// directory and is immutable afterwards. The REPL borrows it
// directly; the HTTP server shares it behind an Arc. There is no
// other state — every reply() call is independent.

use anyhow::Result;

use crate::data::tokenizer::tokenize_and_lemmatize;
use crate::data::vocabulary::Vocabulary;
use crate::domain::traits::MessageResponder;
use crate::infra::checkpoint::CheckpointManager;
use crate::infra::dimensions::{Dimensions, DimensionsStore};
use crate::ml::classifier::{IntentClassifier, Prediction};
use crate::responder::select_best_response;

/// Returned whenever classification confidence is below the
/// threshold — the stored responses are never consulted then.
pub const FALLBACK_REPLY: &str =
    "I'm not sure how to answer that. Can you rephrase or ask something else?";

/// Immutable inference context: the loaded model plus everything
/// needed to encode inputs and decode outputs.
pub struct ChatContext {
    vocabulary: Vocabulary,
    dimensions: Dimensions,
    classifier: IntentClassifier,
}

impl ChatContext {
    /// Load the dimensions artifact and the best checkpoint.
    /// A missing artifact or weights file is fatal — there is
    /// nothing sensible to chat with before training.
    pub fn load(checkpoint_dir: &str) -> Result<Self> {
        let dimensions = DimensionsStore::new(checkpoint_dir).load()?;
        let vocabulary = Vocabulary::from_tokens(dimensions.vocabulary.clone());

        let ckpt = CheckpointManager::new(checkpoint_dir);
        let classifier = IntentClassifier::from_checkpoint(
            &ckpt,
            dimensions.input_size,
            dimensions.output_size,
        )?;

        Ok(Self { vocabulary, dimensions, classifier })
    }

    /// Run the full pipeline for one message.
    ///
    /// Infallible by design: the only runtime failure mode after a
    /// successful load is reading tensor data back, and that is
    /// answered with the fallback string rather than surfaced to
    /// the user mid-conversation.
    fn respond(&self, message: &str) -> String {
        let words = tokenize_and_lemmatize(message);
        let bag   = self.vocabulary.encode(&words);

        match self.classifier.predict(&bag) {
            Ok(prediction) => reply_for(prediction, &words, &self.dimensions),
            Err(e) => {
                tracing::error!("Inference failed: {e:#}");
                FALLBACK_REPLY.to_string()
            }
        }
    }
}

/// Turn one prediction into the final reply: gate on confidence,
/// look up the predicted intent's responses, run the selection
/// heuristic. Kept as a free function so the reply logic can be
/// exercised without a trained checkpoint.
fn reply_for(prediction: Prediction, words: &[String], dimensions: &Dimensions) -> String {
    if !prediction.is_confident() {
        tracing::debug!(
            "Confidence {:.4} below threshold — falling back",
            prediction.confidence,
        );
        return FALLBACK_REPLY.to_string();
    }

    let Some((tag, responses)) = dimensions.responses_for(prediction.index)
    else {
        // Can only happen with a checkpoint/dimensions mismatch
        tracing::error!("No responses for intent index {}", prediction.index);
        return FALLBACK_REPLY.to_string();
    };

    tracing::debug!(
        "Predicted intent '{}' (confidence {:.4})",
        tag,
        prediction.confidence,
    );

    match select_best_response(words, responses) {
        Some(best) => best.to_string(),
        None       => FALLBACK_REPLY.to_string(),
    }
}

impl MessageResponder for ChatContext {
    fn reply(&self, message: &str) -> String {
        self.respond(message)
    }
}
