// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from the raw intents JSON file
// all the way to tensor batches ready for the training loop.
//
// The pipeline flows in this order:
//
//   intents.json
//       │
//       ▼
//   IntentLoader      → reads and validates the dataset file
//       │
//       ▼
//   tokenizer         → lowercases, splits, lemmatizes text
//       │
//       ▼
//   Vocabulary        → sorted unique lemmas; bag-of-words encoding
//       │
//       ▼
//   BowDataset        → implements Burn's Dataset trait
//       │
//       ▼
//   BowBatcher        → stacks samples into tensor batches
//       │
//       ▼
//   DataLoader        → feeds batches to the training loop
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Burn Book §4 (Datasets and Dataloaders)

/// Loads the intents dataset from a JSON file
pub mod loader;

/// Lowercase word tokenization and rule-based lemmatization
pub mod tokenizer;

/// Fitted vocabulary and binary bag-of-words encoding
pub mod vocabulary;

/// Implements Burn's Dataset trait for encoded samples
pub mod dataset;

/// Implements Burn's Batcher trait to create tensor batches
pub mod batcher;
