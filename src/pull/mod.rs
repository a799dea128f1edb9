//! Pulling test definitions from Testomat.io into the workspace.
//!
//! The pipeline only depends on the [`TestFetcher`] trait; the production
//! implementation is [`TestomatioClient`]. At most one fetch happens per
//! invocation and nothing is retried.

mod files;
mod testomatio;

pub use files::write_pulled_files;
pub use testomatio::{PullResponse, TestomatioClient};

use crate::error::{CoverageError, Result};
use crate::workspace::ensure_dir;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// What a successful pull produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullSummary {
    pub files_written: usize,
}

/// Something that can populate a directory with test definitions.
pub trait TestFetcher {
    /// Fetch tests using `api_key` and write them under `target_dir`.
    ///
    /// `target_dir` exists when this is called. Failures are reported as
    /// [`CoverageError::Fetch`].
    fn fetch(&self, api_key: &str, target_dir: &Path) -> Result<PullSummary>;
}

/// Pull tests into `target_dir`, creating it first if needed.
///
/// Progress lines go to `out`. A failed fetch is returned, not printed; the
/// caller decides how to surface it and aborts the rest of the pipeline.
///
/// # Arguments
///
/// * `fetcher` - Source of the test definitions
/// * `api_key` - Testomat.io project key; surrounding whitespace is trimmed
/// * `target_dir` - Directory the tests are written into
/// * `out` - Sink for progress lines
///
/// # Returns
///
/// * `Ok(PullSummary)` - Number of files the fetcher wrote
/// * `Err(CoverageError::MissingCredential)` - If the key is blank; nothing
///   is created and the fetcher is not called
/// * `Err(CoverageError::Fetch)` - If the fetcher failed
/// * `Err(CoverageError::Io)` - If `target_dir` could not be created
///
/// # Example
///
/// ```no_run
/// use coverage_agent::pull::{pull_tests, TestomatioClient};
/// use std::path::Path;
///
/// let client = TestomatioClient::new("https://app.testomat.io");
/// let summary = pull_tests(&client, "tstmt_key", Path::new("mdtests"), &mut std::io::stdout())?;
/// println!("{} files", summary.files_written);
/// # Ok::<(), coverage_agent::error::CoverageError>(())
/// ```
pub fn pull_tests(
    fetcher: &dyn TestFetcher,
    api_key: &str,
    target_dir: &Path,
    out: &mut dyn Write,
) -> Result<PullSummary> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err(CoverageError::MissingCredential);
    }

    let _ = writeln!(
        out,
        "Pulling tests from Testomatio to {}/",
        target_dir.display()
    );

    if ensure_dir(target_dir)? {
        let _ = writeln!(out, "Created directory: {}/", target_dir.display());
    }

    match fetcher.fetch(api_key, target_dir) {
        Ok(summary) => {
            let _ = writeln!(out, "Pulled {} test file(s)\n", summary.files_written);
            Ok(summary)
        }
        Err(err) => {
            debug!(dir = %target_dir.display(), "pull failed");
            if matches!(err, CoverageError::Fetch(_)) {
                Err(err)
            } else {
                Err(CoverageError::Fetch(err.to_string()))
            }
        }
    }
}
