//! Rendering the per-mode prompt file.

use super::template::{OUTPUT_PLACEHOLDER, TESTS_DIR_PLACEHOLDER, substitute_placeholders, vars};
use crate::context::SessionContext;
use crate::error::{CoverageError, Result};
use crate::fs::atomic_write_file;
use crate::mode::Mode;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of rendering a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStatus {
    /// The rendered prompt was written to disk.
    Written,
    /// The template was not found; the path points at the missing template.
    TemplateMissing,
}

/// A prompt path ready to hand to the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub path: PathBuf,
    pub status: PromptStatus,
}

impl RenderedPrompt {
    pub fn is_written(&self) -> bool {
        self.status == PromptStatus::Written
    }
}

/// Where the template for `mode` is expected.
pub fn template_path(mode: Mode, ctx: &SessionContext) -> PathBuf {
    ctx.template_dir.join(mode.template_file_name())
}

/// Where the rendered prompt for `mode` is written.
pub fn rendered_prompt_path(mode: Mode, ctx: &SessionContext) -> PathBuf {
    ctx.temp_root.join(mode.rendered_file_name())
}

/// Render the prompt for `mode` and write it under the temp root.
///
/// A missing template is not an error: a warning is logged and the result
/// carries [`PromptStatus::TemplateMissing`] with the template's own path,
/// which will not resolve for the agent. Other I/O failures are returned.
///
/// The rendered file lives at a fixed per-mode path and is overwritten on
/// every call.
///
/// # Arguments
///
/// * `mode` - Selects the template and the rendered file name
/// * `workspace_dir` - Substituted for `{tests_dir}`
/// * `output_file` - Substituted for `{output}`
/// * `ctx` - Supplies the template directory and temp root
///
/// # Returns
///
/// * `Ok(RenderedPrompt)` with [`PromptStatus::Written`] - Path of the
///   rendered prompt under the temp root
/// * `Ok(RenderedPrompt)` with [`PromptStatus::TemplateMissing`] - Path of
///   the template that was not found
/// * `Err(CoverageError::Io)` - If the template could not be read or the
///   prompt could not be written
///
/// # Example
///
/// ```no_run
/// use coverage_agent::Mode;
/// use coverage_agent::context::SessionContext;
/// use coverage_agent::prompt::render_prompt;
/// use std::path::Path;
///
/// let ctx = SessionContext::from_process()?;
/// let prompt = render_prompt(Mode::Manual, Path::new("/work/mdtests"), "coverage.manual.yml", &ctx)?;
/// println!("{}", prompt.path.display());
/// # Ok::<(), coverage_agent::error::CoverageError>(())
/// ```
pub fn render_prompt(
    mode: Mode,
    workspace_dir: &Path,
    output_file: &str,
    ctx: &SessionContext,
) -> Result<RenderedPrompt> {
    let source = template_path(mode, ctx);

    let template = match fs::read_to_string(&source) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("Prompt file not found: {}", source.display());
            return Ok(RenderedPrompt {
                path: source,
                status: PromptStatus::TemplateMissing,
            });
        }
        Err(e) => return Err(CoverageError::io("failed to read prompt template", source, e)),
    };

    let variables = vars([
        (TESTS_DIR_PLACEHOLDER, workspace_dir.display().to_string()),
        (OUTPUT_PLACEHOLDER, output_file.to_string()),
    ]);
    let content = substitute_placeholders(&template, &variables);

    let target = rendered_prompt_path(mode, ctx);
    atomic_write_file(&target, &content)?;
    debug!(path = %target.display(), "wrote rendered prompt");

    Ok(RenderedPrompt {
        path: target,
        status: PromptStatus::Written,
    })
}
