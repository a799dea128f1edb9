//! Atomic file writes.
//!
//! Rendered prompts and pulled test files are written to a sibling temporary
//! file, synced, and then renamed over the target. A reader (the downstream
//! agent, or a concurrent invocation) sees either the old content or the new
//! content, never a partial file.
//!
//! The temporary name includes the process id so two invocations writing the
//! same target do not share a temp file; the last rename wins.

use crate::error::{CoverageError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file, creating parent directories as needed.
///
/// The content goes to `.{name}.{pid}.tmp` beside the target, is synced, and
/// is then renamed over `path`. On a failed rename the temp file is removed.
///
/// # Arguments
///
/// * `path` - The target file path
/// * `content` - The bytes to write
///
/// # Returns
///
/// * `Ok(())` - The target holds exactly `content`
/// * `Err(CoverageError::Io)` - If the parent, temp file, or rename failed
///
/// # Example
///
/// ```no_run
/// use coverage_agent::fs::atomic::atomic_write;
/// use std::path::Path;
///
/// atomic_write(Path::new("mdtests/login.md"), b"# Login\n")?;
/// # Ok::<(), coverage_agent::error::CoverageError>(())
/// ```
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .map_err(|e| CoverageError::io("failed to create parent directory", parent, e))?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content)?;

    // rename() replaces an existing target on both POSIX and Windows
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        CoverageError::io("failed to replace file", path, e)
    })?;

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// `.{filename}.{pid}.tmp` in the target's directory.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            CoverageError::io(
                "invalid file path",
                target,
                std::io::Error::from(std::io::ErrorKind::InvalidInput),
            )
        })?;

    Ok(parent.join(format!(".{}.{}.tmp", filename, std::process::id())))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file =
        File::create(path).map_err(|e| CoverageError::io("failed to create temporary file", path, e))?;

    let written = file.write_all(content).and_then(|()| file.sync_all());
    if let Err(e) = written {
        let _ = fs::remove_file(path);
        return Err(CoverageError::io("failed to write temporary file", path, e));
    }

    Ok(())
}
