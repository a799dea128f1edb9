//! CLI argument parsing for coverage-agent.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::mode::Mode;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Prepare test-coverage analysis prompts for Claude Code.
///
/// Each subcommand resolves a tests directory, renders a prompt file under
/// the system temp directory, and prints the command that starts the agent.
#[derive(Parser, Debug)]
#[command(name = "coverage-agent")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for coverage-agent.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prepare manual tests coverage analysis.
    ///
    /// Pulls manual test cases from Testomat.io (unless --skip-pull) and
    /// renders the manual coverage prompt.
    Manual(ManualArgs),

    /// Prepare automated e2e tests coverage analysis.
    Automated(AutomatedArgs),
}

impl Command {
    pub fn mode(&self) -> Mode {
        match self {
            Command::Manual(_) => Mode::Manual,
            Command::Automated(_) => Mode::Automated,
        }
    }
}

/// Arguments for the `manual` command.
#[derive(Parser, Debug, Clone)]
pub struct ManualArgs {
    /// Testomatio API key (falls back to the TESTOMATIO environment variable).
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Directory for tests (uses temp dir if not specified).
    #[arg(short = 's', long)]
    pub tests_dir: Option<PathBuf>,

    /// Output coverage file.
    #[arg(short, long, default_value = "coverage.manual.yml")]
    pub output: String,

    /// Skip pulling tests from Testomatio.
    #[arg(long)]
    pub skip_pull: bool,
}

/// Arguments for the `automated` command.
#[derive(Parser, Debug, Clone)]
pub struct AutomatedArgs {
    /// Directory for tests (uses temp dir if not specified).
    #[arg(short = 's', long)]
    pub tests_dir: Option<PathBuf>,

    /// Output coverage file.
    #[arg(short, long, default_value = "coverage.e2e.yml")]
    pub output: String,
}
