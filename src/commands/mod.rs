//! Command implementations for coverage-agent.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each pipeline takes its collaborators explicitly
//! (session context, fetcher, output sink) so it can run against scratch
//! directories in tests.

mod automated;
mod manual;


pub use automated::run_automated;
pub use manual::run_manual;

use crate::cli::Command;
use crate::config::Configuration;
use crate::context::SessionContext;
use crate::error::Result;
use crate::prompt::RenderedPrompt;
use crate::pull::TestomatioClient;
use std::io;

/// Result of a completed pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub config: Configuration,
    pub prompt: RenderedPrompt,
}

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. It resolves the
/// session context from the running process and writes to stdout.
pub fn dispatch(command: Command) -> Result<()> {
    let ctx = SessionContext::from_process()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match command {
        Command::Manual(args) => {
            let client = TestomatioClient::new(ctx.service_url.clone());
            run_manual(&args, &ctx, &client, &mut out)?;
        }
        Command::Automated(args) => {
            run_automated(&args, &ctx, &mut out)?;
        }
    }

    Ok(())
}
