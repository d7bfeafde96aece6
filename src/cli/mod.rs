// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Three commands are supported:
//   1. `train` — fits the vocabulary and trains the classifier
//   2. `chat`  — interactive REPL against a trained model
//   3. `serve` — HTTP front-end exposing POST /chat
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, TrainArgs, ChatArgs, ServeArgs};

use crate::application::chat_context::ChatContext;
use crate::domain::traits::MessageResponder;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "intent-chatbot",
    version = "0.1.0",
    about = "Train a bag-of-words intent classifier, then chat with it over a REPL or HTTP."
)]
pub struct Cli {
    /// The subcommand to run (train, chat, or serve)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// This keeps the CLI layer thin — it only routes, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args) => Self::run_train(args),
            Commands::Chat(args)  => Self::run_chat(args),
            Commands::Serve(args) => Self::run_serve(args),
        }
    }

    /// Handles the `train` subcommand.
    /// Converts CLI args into a TrainConfig and hands off to Layer 2.
    fn run_train(args: TrainArgs) -> Result<()> {
        use crate::application::train_use_case::TrainUseCase;

        tracing::info!("Starting training on dataset: {}", args.dataset);

        // Convert CLI args → application config (separates presentation from domain)
        let use_case = TrainUseCase::new(args.into());
        use_case.execute()?;

        println!("Training complete. Checkpoint saved.");
        Ok(())
    }

    /// Handles the `chat` subcommand: a line-based REPL.
    /// The model and dimensions are loaded once; each turn is stateless.
    fn run_chat(args: ChatArgs) -> Result<()> {
        let context = ChatContext::load(&args.checkpoint_dir)?;

        println!("Chatbot ready! Type '/quit' to exit.");

        let stdin = io::stdin();
        loop {
            print!("You: ");
            io::stdout().flush()?;

            let mut line = String::new();
            // EOF (Ctrl-D / closed pipe) ends the session like /quit
            if stdin.lock().read_line(&mut line)? == 0 {
                break;
            }

            let message = line.trim();
            if message.eq_ignore_ascii_case("/quit") {
                break;
            }
            if message.is_empty() {
                continue;
            }

            println!("Bot: {}", context.reply(message));
        }

        Ok(())
    }

    /// Handles the `serve` subcommand.
    /// Loads the chat context once and shares it read-only across requests.
    fn run_serve(args: ServeArgs) -> Result<()> {
        let context: Arc<dyn MessageResponder> =
            Arc::new(ChatContext::load(&args.checkpoint_dir)?);

        crate::server::serve(context, &args.host, args.port)
    }
}
