//! Implementation of the `coverage-agent manual` command.
//!
//! # What `manual` does
//!
//! 1. Resolves the API key (`--api-key`, then `TESTOMATIO`); stops if absent
//! 2. Resolves the tests directory (explicit, or the manual temp directory)
//! 3. Pulls tests from Testomat.io into it, unless `--skip-pull`
//! 4. Renders the manual coverage prompt
//! 5. Prints the configuration summary and handoff command

use super::Session;
use crate::cli::ManualArgs;
use crate::config::{Configuration, resolve_api_key};
use crate::context::SessionContext;
use crate::error::{CoverageError, Result};
use crate::mode::Mode;
use crate::prompt::render_prompt;
use crate::pull::{TestFetcher, pull_tests};
use crate::report::write_report;
use crate::workspace::{ensure_dir, locate_workspace};
use std::io::Write;
use tracing::debug;

/// Run the manual pipeline.
///
/// A missing API key fails before any directory is created or any file is
/// written. A failed pull aborts before the prompt is rendered.
pub fn run_manual(
    args: &ManualArgs,
    ctx: &SessionContext,
    fetcher: &dyn TestFetcher,
    out: &mut dyn Write,
) -> Result<Session> {
    let mode = Mode::Manual;
    let _ = writeln!(out, "{}\n", mode.banner());

    let api_key = resolve_api_key(args.api_key.as_deref(), &*ctx.env)
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
        .ok_or(CoverageError::MissingCredential)?;

    let workspace = locate_workspace(args.tests_dir.as_deref(), mode, ctx)?;

    if args.skip_pull {
        ensure_dir(&workspace.path)?;
        let _ = writeln!(out, "Skipping test pull (using existing files)\n");
    } else {
        pull_tests(fetcher, &api_key, &workspace.path, out)?;
    }

    let prompt = render_prompt(mode, &workspace.path, &args.output, ctx)?;
    debug!(path = %prompt.path.display(), status = ?prompt.status, "prompt ready");

    let config = Configuration {
        mode,
        credential: Some(api_key),
        workspace_dir: workspace.path,
        using_temp_dir: workspace.is_temp,
        output_file: args.output.clone(),
        skip_fetch: args.skip_pull,
    };
    write_report(out, &prompt, &config);

    Ok(Session { config, prompt })
}
