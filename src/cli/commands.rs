// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the three subcommands: `train`, `chat`, and `serve`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use crate::application::train_use_case::TrainConfig;

/// The three top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train the intent classifier on a JSON intents dataset
    Train(TrainArgs),

    /// Chat interactively using a trained checkpoint
    Chat(ChatArgs),

    /// Serve POST /chat over HTTP using a trained checkpoint
    Serve(ServeArgs),
}

/// All arguments for the `train` command.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Path to the intents dataset JSON file
    #[arg(long, default_value = "data/intents.json")]
    pub dataset: String,

    /// Directory to save model weights and the dimensions artifact
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// Number of samples processed together in one forward pass
    #[arg(long, default_value_t = 16)]
    pub batch_size: usize,

    /// Maximum number of full passes through the training data.
    /// Early stopping usually ends the run well before this.
    #[arg(long, default_value_t = 500)]
    pub epochs: usize,

    /// How fast the model learns — too high causes instability,
    /// too low causes slow convergence
    #[arg(long, default_value_t = 5e-5)]
    pub lr: f64,

    /// Stop after this many epochs without a training-loss improvement
    #[arg(long, default_value_t = 75)]
    pub patience: usize,

    /// Dropout probability — randomly zeroes activations during training
    /// to prevent overfitting
    #[arg(long, default_value_t = 0.3)]
    pub dropout: f64,
}

/// Convert CLI TrainArgs into the application-layer TrainConfig.
/// This is the boundary between Layer 1 and Layer 2 —
/// the application layer never sees clap types.
impl From<TrainArgs> for TrainConfig {
    fn from(a: TrainArgs) -> Self {
        TrainConfig {
            dataset:        a.dataset,
            checkpoint_dir: a.checkpoint_dir,
            batch_size:     a.batch_size,
            epochs:         a.epochs,
            lr:             a.lr,
            patience:       a.patience,
            dropout:        a.dropout,
        }
    }
}

/// All arguments for the `chat` command
#[derive(Args, Debug)]
pub struct ChatArgs {
    /// Directory where weights and dimensions were saved during training
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,
}

/// All arguments for the `serve` command
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Directory where weights and dimensions were saved during training
    #[arg(long, default_value = "checkpoints")]
    pub checkpoint_dir: String,

    /// Address to bind the HTTP listener to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind the HTTP listener to
    #[arg(long, default_value_t = 5000)]
    pub port: u16,
}
