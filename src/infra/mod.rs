// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles all cross-cutting concerns that don't belong in
// any specific business layer:
//
//   checkpoint.rs — Saving and loading model weights.
//                   Uses Burn's CompactRecorder to serialise
//                   model parameters to disk. Also saves the
//                   TrainConfig as JSON for provenance.
//
//   dimensions.rs — The dimensions artifact: vocabulary, intent
//                   list, intent→responses mapping, and the
//                   network input/output sizes. Written once at
//                   training time, read-only at inference time.
//
//   metrics.rs    — Training metrics logging. Writes epoch-level
//                   loss and accuracy to a CSV file for later
//                   analysis and plotting.
//
// Reference: Rust Book §7 (Modules)
//            Burn Book §5 (Checkpointing)

/// Model checkpoint saving and loading
pub mod checkpoint;

/// The persisted dimensions artifact
pub mod dimensions;

/// Training metrics CSV logger
pub mod metrics;
