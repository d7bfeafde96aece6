#![allow(dead_code)]

mod cli;
mod application;
mod domain;
mod data;
mod ml;
mod responder;
mod server;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("intent_chatbot=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
