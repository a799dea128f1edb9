//! Operating modes and the per-mode constants they select.
//!
//! Each mode has its own template, default output file, temp workspace and
//! rendered prompt location, so the two modes never overwrite each other.

use std::fmt;

/// Which kind of coverage analysis is being prepared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Manual test cases pulled from Testomat.io.
    Manual,
    /// Automated end-to-end tests already present on disk.
    Automated,
}

impl Mode {
    /// Returns the mode name as used on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Manual => "manual",
            Mode::Automated => "automated",
        }
    }

    /// Default coverage output file name.
    pub fn default_output(self) -> &'static str {
        match self {
            Mode::Manual => "coverage.manual.yml",
            Mode::Automated => "coverage.e2e.yml",
        }
    }

    /// Name of the temp directory used when `--tests-dir` is not given.
    pub fn temp_workspace_name(self) -> &'static str {
        match self {
            Mode::Manual => "testomatio-manual-tests",
            Mode::Automated => "testomatio-e2e-tests",
        }
    }

    /// File name of the prompt template inside the template directory.
    pub fn template_file_name(self) -> &'static str {
        match self {
            Mode::Manual => "manual-prompt.md",
            Mode::Automated => "automated-prompt.md",
        }
    }

    /// File name of the rendered prompt inside the temp root.
    pub fn rendered_file_name(self) -> &'static str {
        match self {
            Mode::Manual => "testomatio-manual-coverage-prompt.md",
            Mode::Automated => "testomatio-automated-coverage-prompt.md",
        }
    }

    /// Banner printed when the command starts.
    pub fn banner(self) -> &'static str {
        match self {
            Mode::Manual => "Preparing Manual Test Coverage Agent for Claude Code",
            Mode::Automated => "Preparing Automated E2E Test Coverage Agent for Claude Code",
        }
    }

    /// Instruction handed to the agent alongside the rendered prompt.
    pub fn launch_phrase(self) -> &'static str {
        match self {
            Mode::Manual => "launch manual test coverage agent",
            Mode::Automated => "launch automated e2e test coverage agent",
        }
    }

    /// Flags shown in the "to change configuration" hint.
    pub fn override_flags(self) -> &'static [&'static str] {
        match self {
            Mode::Manual => &["--tests-dir <dir>", "--output <file>", "--skip-pull"],
            Mode::Automated => &["--tests-dir <dir>", "--output <file>"],
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
