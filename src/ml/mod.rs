// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// This layer contains ALL Burn framework specific code.
// No other layer imports from burn directly — only this one
// and the thin data adapters (dataset/batcher) in Layer 4.
//
// What's in this layer:
//
//   model.rs      — The fixed 5-layer MLP classifier
//                   Linear 512 → 256 → 128 → 64 → output with
//                   batch normalization, ReLU, and dropout
//
//   trainer.rs    — The training loop
//                   Cross-entropy loss, Adam updates, and
//                   early stopping on a training-loss plateau
//
//   classifier.rs — The inference engine
//                   Loads the best checkpoint, runs a forward
//                   pass, softmaxes the logits, and reports the
//                   top intent with its confidence
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)

/// The fixed MLP architecture
pub mod model;

/// Training loop with early stopping and checkpointing
pub mod trainer;

/// Inference engine — loads a checkpoint and predicts intents
pub mod classifier;
