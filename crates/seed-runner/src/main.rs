//! chat-seed entry point
//!
//! Run with:
//! ```bash
//! cargo run -p seed-runner -- --api-url http://localhost:3000
//! ```
//!
//! Configuration is loaded from environment variables (or `.env`); flags
//! override it.

mod cli;

use std::io;

use clap::Parser;
use seed_common::{try_init_tracing_with_config, SeedConfig, TracingConfig};
use tracing::error;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    // Load configuration first so `.env` values are visible to clap's `env` args
    let config = match SeedConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let cli = Cli::parse();

    // Initialize tracing
    let tracing_config = TracingConfig::for_environment(config.app.env, cli.verbose);
    if let Err(e) = try_init_tracing_with_config(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    if let Err(e) = cli::execute(cli, config, &mut io::stdout()).await {
        let message = format!("{e:#}");
        match cli::failed_step(&e) {
            Some(step) => error!(step = %step, error = %message, "chat-seed failed"),
            None => error!(error = %message, "chat-seed failed"),
        }
        std::process::exit(1);
    }
}
