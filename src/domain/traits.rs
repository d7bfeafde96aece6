// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. For example:
//   - IntentLoader implements IntentSource
//   - A future SqliteSource could also implement IntentSource
//   - The application layer only sees IntentSource
//     and works with both without any changes
//
// This is the Dependency Inversion Principle from SOLID,
// applied using Rust's trait system.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::intent::Intent;

// ─── IntentSource ─────────────────────────────────────────────────────────────
/// Any component that can load the intent dataset.
///
/// Implementations:
///   - IntentLoader → loads from a JSON file on disk
pub trait IntentSource {
    /// Load all intents from this source.
    /// Every intent is guaranteed to carry at least one pattern
    /// and at least one response.
    fn load_all(&self) -> Result<Vec<Intent>>;
}

// ─── MessageResponder ─────────────────────────────────────────────────────────
/// Any component that can turn a user message into a reply.
///
/// Both front-ends (REPL and HTTP) depend only on this trait,
/// which also lets the HTTP handler be tested with a stub.
///
/// Implementations:
///   - ChatContext → encoder → classifier → responder pipeline
pub trait MessageResponder: Send + Sync {
    /// Produce the bot's reply for one user message.
    /// Never fails: low confidence yields the fixed fallback string.
    fn reply(&self, message: &str) -> String;
}
