//! Implementation of the `coverage-agent automated` command.
//!
//! Resolves the tests directory, renders the automated e2e coverage prompt,
//! and prints the handoff command. Nothing is pulled and no API key is read.

use super::Session;
use crate::cli::AutomatedArgs;
use crate::config::Configuration;
use crate::context::SessionContext;
use crate::error::Result;
use crate::mode::Mode;
use crate::prompt::render_prompt;
use crate::report::write_report;
use crate::workspace::locate_workspace;
use std::io::Write;

/// Run the automated pipeline.
pub fn run_automated(
    args: &AutomatedArgs,
    ctx: &SessionContext,
    out: &mut dyn Write,
) -> Result<Session> {
    let mode = Mode::Automated;
    let _ = writeln!(out, "{}\n", mode.banner());

    let workspace = locate_workspace(args.tests_dir.as_deref(), mode, ctx)?;
    let prompt = render_prompt(mode, &workspace.path, &args.output, ctx)?;

    let config = Configuration {
        mode,
        credential: None,
        workspace_dir: workspace.path,
        using_temp_dir: workspace.is_temp,
        output_file: args.output.clone(),
        skip_fetch: true,
    };
    write_report(out, &prompt, &config);

    Ok(Session { config, prompt })
}
