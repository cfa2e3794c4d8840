//! # shade-cli
//!
//! Command-line interface for Shade.
//!
//! Keeps chat-editing snapshot files out of the editor's Problems panel
//! by managing one reserved glob pattern in the workspace's
//! `problems.exclude` settings map:
//! - `shade activate` — enforce the hidden state once at session startup
//! - `shade toggle` — flip between hidden and visible
//! - `shade status` — report the current state

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shade_settings::ShadeConfig;
use tracing_subscriber::EnvFilter;

/// Shade — hide chat snapshot diagnostics from the Problems panel.
#[derive(Parser)]
#[command(name = "shade", version, about)]
struct Cli {
    /// Project root directory (defaults to current directory).
    #[arg(long, default_value = ".")]
    project_root: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Enforce the hidden state (run once at editor startup).
    Activate,
    /// Toggle snapshot diagnostics between hidden and visible.
    Toggle,
    /// Show whether snapshot diagnostics are currently hidden.
    Status {
        /// Also list workspace files the reserved pattern matches.
        #[arg(long)]
        files: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the toggle notice on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("shade_settings=info".parse()?)
                .add_directive("shade_cli=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();
    let project_root = cli.project_root.canonicalize().unwrap_or(cli.project_root);
    let config = ShadeConfig::for_project(&project_root);

    match &cli.command {
        Commands::Activate => commands::activate::execute(&config),
        Commands::Toggle => commands::toggle::execute(&config),
        Commands::Status { files } => commands::status::execute(&config, *files),
    }
}
