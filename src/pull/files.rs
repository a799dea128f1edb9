//! Writing pulled test files into the workspace.

use crate::error::{CoverageError, Result};
use crate::fs::atomic_write_file;
use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};

/// Write each `relative path -> content` entry under `target_dir`.
///
/// Existing files are overwritten. All paths are checked before anything is
/// written; an absolute path or one that climbs out with `..` rejects the
/// whole batch. Returns the number of files written.
pub fn write_pulled_files(target_dir: &Path, files: &BTreeMap<String, String>) -> Result<usize> {
    let mut resolved = Vec::with_capacity(files.len());
    for (relative, content) in files {
        resolved.push((contained_path(target_dir, relative)?, content));
    }

    for (path, content) in &resolved {
        atomic_write_file(path, content)?;
    }

    Ok(resolved.len())
}

fn contained_path(target_dir: &Path, relative: &str) -> Result<PathBuf> {
    let candidate = Path::new(relative);
    let mut has_normal = false;

    for component in candidate.components() {
        match component {
            Component::Normal(_) => has_normal = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(CoverageError::Fetch(format!(
                    "refusing to write pulled file outside the tests directory: {}",
                    relative
                )));
            }
        }
    }

    if !has_normal {
        return Err(CoverageError::Fetch(format!(
            "pulled file has an empty path: '{}'",
            relative
        )));
    }

    Ok(target_dir.join(candidate))
}
