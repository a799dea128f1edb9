//! Session context resolution for coverage-agent.
//!
//! This module is the only place that looks at process-global state (current
//! directory, temp directory, executable location, environment variables).
//! Everything downstream receives a [`SessionContext`] instead, so tests can
//! point a whole run at a scratch directory.

use crate::config::{EnvSource, PROMPTS_DIR_ENV, ProcessEnv, SERVICE_URL_ENV};
use crate::error::{CoverageError, Result};
use std::env;
use std::path::PathBuf;
use tracing::debug;

/// Default Testomat.io base URL.
pub const DEFAULT_SERVICE_URL: &str = "https://app.testomat.io";

/// Directory next to the executable that holds the prompt templates.
pub const DEFAULT_PROMPTS_DIR: &str = "prompts";

/// Templates shipped in the source tree, used when nothing is installed
/// next to the executable (`cargo run`, `cargo install` from a checkout).
pub const SHIPPED_PROMPTS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/prompts");

/// Resolved inputs for one invocation.
///
/// All paths are absolute.
pub struct SessionContext {
    /// Directory relative paths on the command line are resolved against.
    pub cwd: PathBuf,

    /// Root under which temp workspaces and rendered prompts are placed.
    pub temp_root: PathBuf,

    /// Directory containing `manual-prompt.md` and `automated-prompt.md`.
    pub template_dir: PathBuf,

    /// Base URL of the Testomat.io service.
    pub service_url: String,

    /// Environment accessor used for credential lookup.
    pub env: Box<dyn EnvSource>,
}

impl SessionContext {
    /// Resolve the context from the running process.
    ///
    /// # Returns
    ///
    /// * `Ok(SessionContext)` - Successfully resolved context
    /// * `Err(CoverageError::Io)` - If the working directory or executable
    ///   location cannot be determined
    pub fn from_process() -> Result<Self> {
        let cwd = env::current_dir()
            .map_err(|e| CoverageError::io("failed to get current directory", ".", e))?;
        let temp_root = env::temp_dir();
        let env_source = ProcessEnv;

        let template_dir = match env_source.non_empty_var(PROMPTS_DIR_ENV) {
            Some(dir) => cwd.join(dir),
            None => default_prompts_dir()?,
        };

        let service_url = env_source
            .non_empty_var(SERVICE_URL_ENV)
            .unwrap_or_else(|| DEFAULT_SERVICE_URL.to_string());

        Ok(Self {
            cwd,
            temp_root,
            template_dir,
            service_url,
            env: Box::new(env_source),
        })
    }

    /// Build a context from explicit parts.
    ///
    /// This is useful for testing or when embedding the pipeline.
    pub fn new(
        cwd: impl Into<PathBuf>,
        temp_root: impl Into<PathBuf>,
        template_dir: impl Into<PathBuf>,
        env: Box<dyn EnvSource>,
    ) -> Self {
        Self {
            cwd: cwd.into(),
            temp_root: temp_root.into(),
            template_dir: template_dir.into(),
            service_url: DEFAULT_SERVICE_URL.to_string(),
            env,
        }
    }

    /// Override the service URL, builder style.
    pub fn with_service_url(mut self, url: impl Into<String>) -> Self {
        self.service_url = url.into();
        self
    }
}

/// `prompts/` next to the running executable if present, else the shipped
/// templates.
fn default_prompts_dir() -> Result<PathBuf> {
    let installed = installed_prompts_dir()?;
    if installed.is_dir() {
        return Ok(installed);
    }
    debug!(
        installed = %installed.display(),
        "no installed prompts, using shipped templates"
    );
    Ok(PathBuf::from(SHIPPED_PROMPTS_DIR))
}

/// `prompts/` next to the running executable.
fn installed_prompts_dir() -> Result<PathBuf> {
    let exe = env::current_exe()
        .map_err(|e| CoverageError::io("failed to locate executable", "coverage-agent", e))?;
    let install_dir = exe.parent().map(PathBuf::from).unwrap_or_default();
    Ok(install_dir.join(DEFAULT_PROMPTS_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapEnv;
    use serial_test::serial;

    #[test]
    fn test_new_uses_default_service_url() {
        let ctx = SessionContext::new("/work", "/tmp", "/prompts", Box::new(MapEnv::new()));
        assert_eq!(ctx.service_url, DEFAULT_SERVICE_URL);
        assert_eq!(ctx.cwd, PathBuf::from("/work"));
    }

    #[test]
    fn test_with_service_url_overrides() {
        let ctx = SessionContext::new("/work", "/tmp", "/prompts", Box::new(MapEnv::new()))
            .with_service_url("http://localhost:9000");
        assert_eq!(ctx.service_url, "http://localhost:9000");
    }

    #[test]
    fn test_shipped_prompts_dir_holds_both_templates() {
        let dir = PathBuf::from(SHIPPED_PROMPTS_DIR);
        assert!(dir.join("manual-prompt.md").is_file());
        assert!(dir.join("automated-prompt.md").is_file());
    }

    #[test]
    #[serial]
    fn test_from_process_honours_overrides() {
        // SAFETY: serialized with other env-mutating tests.
        unsafe {
            env::set_var(PROMPTS_DIR_ENV, "/opt/prompts");
            env::set_var(SERVICE_URL_ENV, "http://testomat.local");
        }

        let ctx = SessionContext::from_process().unwrap();

        // SAFETY: as above.
        unsafe {
            env::remove_var(PROMPTS_DIR_ENV);
            env::remove_var(SERVICE_URL_ENV);
        }

        assert_eq!(ctx.template_dir, PathBuf::from("/opt/prompts"));
        assert_eq!(ctx.service_url, "http://testomat.local");
        assert!(ctx.cwd.is_absolute());
        assert_eq!(ctx.temp_root, env::temp_dir());
    }

    #[test]
    #[serial]
    fn test_from_process_default_templates_exist() {
        // SAFETY: serialized with other env-mutating tests.
        unsafe {
            env::remove_var(PROMPTS_DIR_ENV);
            env::remove_var(SERVICE_URL_ENV);
        }

        let ctx = SessionContext::from_process().unwrap();

        assert!(ctx.template_dir.ends_with(DEFAULT_PROMPTS_DIR));
        assert!(ctx.template_dir.join("manual-prompt.md").is_file());
        assert!(ctx.template_dir.join("automated-prompt.md").is_file());
        assert_eq!(ctx.service_url, DEFAULT_SERVICE_URL);
    }
}
