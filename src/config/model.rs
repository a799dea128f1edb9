//! The resolved configuration for one invocation.

use crate::mode::Mode;
use std::path::PathBuf;

/// Everything the pipeline decided for this invocation.
///
/// Built once per run from flags and environment, then discarded on exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub mode: Mode,

    /// API key; always `Some` and non-empty in manual mode.
    pub credential: Option<String>,

    /// Absolute path to the workspace holding test artifacts.
    pub workspace_dir: PathBuf,

    /// True when `workspace_dir` is the per-mode temp directory.
    pub using_temp_dir: bool,

    /// Coverage output file name the agent should write.
    pub output_file: String,

    /// Whether the remote pull was skipped. Always true in automated mode.
    pub skip_fetch: bool,
}
