//! Command-line interface for `chat-seed`

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use seed_common::{print_json, ApiConfig, SeedConfig};
use seed_runner::{SeedError, SeedProfile, Step, WorkflowRunner};
use tracing::info;

/// chat-seed CLI
#[derive(Debug, Parser)]
#[command(name = "chat-seed")]
#[command(about = "Seed a chat backend with a demo user, workspace, member and channel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// When to color the printed JSON
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and NO_COLOR is unset
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    /// Whether the printer should emit color codes at all
    pub fn enabled(self) -> bool {
        !matches!(self, Self::Never)
    }
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the seeding workflow (the default)
    Run(RunArgs),

    /// Pretty-print a JSON document
    Pretty {
        /// File to read; stdin when omitted or `-`
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Args, Default)]
pub struct RunArgs {
    /// Backend base URL
    #[arg(long, env = "SEED_API_URL")]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds (overrides SEED_HTTP_TIMEOUT_SECS)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Username for the created user
    #[arg(long)]
    pub username: Option<String>,

    /// Email for the created user
    #[arg(long)]
    pub email: Option<String>,

    /// Name of the created workspace
    #[arg(long)]
    pub workspace_name: Option<String>,

    /// Name of the created channel
    #[arg(long)]
    pub channel_name: Option<String>,
}

impl RunArgs {
    /// Apply the connection overrides to `api` and build the payload profile
    pub fn apply(self, api: &mut ApiConfig) -> SeedProfile {
        if let Some(url) = self.api_url {
            api.base_url = url;
        }
        if let Some(secs) = self.timeout {
            api.timeout_secs = Some(secs);
        }

        let mut profile = SeedProfile::default();
        if let Some(username) = self.username {
            profile = profile.with_username(username);
        }
        if let Some(email) = self.email {
            profile = profile.with_email(email);
        }
        if let Some(name) = self.workspace_name {
            profile = profile.with_workspace_name(name);
        }
        if let Some(name) = self.channel_name {
            profile = profile.with_channel_name(name);
        }
        profile
    }
}

/// Dispatch the parsed command, writing the printed JSON to `out`
pub async fn execute<W: Write>(cli: Cli, config: SeedConfig, out: &mut W) -> anyhow::Result<()> {
    if cli.color == ColorChoice::Always {
        colored::control::set_override(true);
    }
    let color = cli.color.enabled();

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => seed(args, config, out, color).await,
        Commands::Pretty { file } => {
            let raw = read_input(file.as_deref())?;
            print_json(&raw, out, color).context("Failed to pretty-print input")?;
            Ok(())
        }
    }
}

async fn seed<W: Write>(
    args: RunArgs,
    mut config: SeedConfig,
    out: &mut W,
    color: bool,
) -> anyhow::Result<()> {
    let profile = args.apply(&mut config.api);
    let runner = WorkflowRunner::new(&config.api, profile)?;

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        api = %config.api.base_url,
        workspace = %runner.profile().workspace_name,
        channel = %runner.profile().channel_name,
        "Seeding backend"
    );

    runner.run_and_print(out, color).await?;
    info!("Seeding complete");
    Ok(())
}

/// Read the whole document from `file`, or from stdin for `None` and `-`
fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// The workflow step a failed run stopped at, if the failure came from a request
pub fn failed_step(err: &anyhow::Error) -> Option<Step> {
    err.downcast_ref::<SeedError>().and_then(SeedError::step)
}
