//! nodeforge CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use nodeforge::ForgeConfig;
use nodeforge_cli_lib::NewCommand;
use std::path::Path;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "nodeforge")]
#[command(version)]
#[command(about = "Generate a minimal Express backend project", long_about = None)]
struct Cli {
    /// Project name (defaults to `backend`)
    #[arg(allow_hyphen_values = true)]
    name: Option<String>,
}

fn run(cli: Cli) -> Result<()> {
    let config = ForgeConfig::load()?;
    let cwd = std::env::current_dir().context("Failed to read current directory")?;

    generate(cli, &cwd, config)
}

fn generate(cli: Cli, cwd: &Path, config: ForgeConfig) -> Result<()> {
    let cmd = NewCommand::new(cli.name, cwd, config)?;
    cmd.execute()
}

/// Report the outcome and map it to the process exit status
fn exit_status(result: Result<()>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            tracing::debug!(error = ?err, "generation failed");
            eprintln!("{} {err:#}", style("✗").red().bold());
            1
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = nodeforge::observability::init() {
        eprintln!("{} {err:#}", style("warning:").yellow().bold());
    }

    ExitCode::from(exit_status(run(cli)))
}
