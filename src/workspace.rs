//! Workspace directory location.
//!
//! The workspace holds the test artifacts the agent analyses. It is either
//! given on the command line or a per-mode directory under the temp root.

use crate::context::SessionContext;
use crate::error::{CoverageError, Result};
use crate::mode::Mode;
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// A resolved workspace directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    /// Absolute path to the directory.
    pub path: PathBuf,

    /// True when this is the per-mode temp directory.
    pub is_temp: bool,
}

/// Locate the workspace directory for `mode`.
///
/// An explicit directory is resolved against `ctx.cwd` but not created. With
/// no explicit directory, `<temp_root>/<mode temp name>` is created (with
/// parents) if missing; repeated calls return the same path.
pub fn locate_workspace(
    explicit: Option<&Path>,
    mode: Mode,
    ctx: &SessionContext,
) -> Result<Workspace> {
    if let Some(dir) = explicit {
        let path = normalize(&ctx.cwd.join(dir));
        debug!(path = %path.display(), "using explicit workspace");
        return Ok(Workspace {
            path,
            is_temp: false,
        });
    }

    let path = ctx.temp_root.join(mode.temp_workspace_name());
    ensure_dir(&path)?;
    debug!(path = %path.display(), "using temp workspace");
    Ok(Workspace {
        path,
        is_temp: true,
    })
}

/// Create `path` and any missing parents. A no-op if it already exists.
pub fn ensure_dir(path: &Path) -> Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(path)
        .map_err(|e| CoverageError::io("failed to create directory", path, e))?;
    Ok(true)
}

/// Lexically remove `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapEnv;
    use tempfile::TempDir;

    fn context(root: &Path) -> SessionContext {
        SessionContext::new(
            root.join("cwd"),
            root.join("tmp"),
            root.join("prompts"),
            Box::new(MapEnv::new()),
        )
    }

    #[test]
    fn test_temp_workspace_is_stable_and_exists() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(temp_dir.path());

        let first = locate_workspace(None, Mode::Manual, &ctx).unwrap();
        assert!(first.path.is_dir());
        assert!(first.is_temp);

        let second = locate_workspace(None, Mode::Manual, &ctx).unwrap();
        assert_eq!(first, second);
        assert!(second.path.is_dir());
    }

    #[test]
    fn test_temp_workspace_is_namespaced_by_mode() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(temp_dir.path());

        let manual = locate_workspace(None, Mode::Manual, &ctx).unwrap();
        let automated = locate_workspace(None, Mode::Automated, &ctx).unwrap();

        assert_ne!(manual.path, automated.path);
        assert_eq!(
            manual.path,
            temp_dir.path().join("tmp").join("testomatio-manual-tests")
        );
        assert_eq!(
            automated.path,
            temp_dir.path().join("tmp").join("testomatio-e2e-tests")
        );
    }

    #[test]
    fn test_explicit_relative_dir_is_anchored_at_cwd_and_not_created() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(temp_dir.path());

        let workspace = locate_workspace(Some(Path::new("./t")), Mode::Manual, &ctx).unwrap();

        assert!(workspace.path.is_absolute());
        assert_eq!(workspace.path, temp_dir.path().join("cwd").join("t"));
        assert!(!workspace.is_temp);
        assert!(!workspace.path.exists());
    }

    #[test]
    fn test_explicit_absolute_dir_kept() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(temp_dir.path());
        let absolute = temp_dir.path().join("elsewhere");

        let workspace = locate_workspace(Some(&absolute), Mode::Automated, &ctx).unwrap();

        assert_eq!(workspace.path, absolute);
    }

    #[test]
    fn test_explicit_dir_parent_components_resolved() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(temp_dir.path());

        let workspace =
            locate_workspace(Some(Path::new("../sibling/./tests")), Mode::Manual, &ctx).unwrap();

        assert_eq!(workspace.path, temp_dir.path().join("sibling").join("tests"));
    }

    #[test]
    fn test_ensure_dir_reports_creation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("a").join("b");

        assert!(ensure_dir(&path).unwrap());
        assert!(!ensure_dir(&path).unwrap());
        assert!(path.is_dir());
    }

    #[test]
    fn test_ensure_dir_fails_when_path_is_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("file");
        fs::write(&path, "x").unwrap();

        let err = ensure_dir(&path).unwrap_err();
        assert!(matches!(err, CoverageError::Io { .. }));
    }
}
