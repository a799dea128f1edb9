//! Shared fixtures for pipeline tests.

use crate::config::{API_KEY_ENV, MapEnv};
use crate::context::SessionContext;
use crate::error::{CoverageError, Result};
use crate::mode::Mode;
use crate::prompt::template_path;
use crate::pull::{PullSummary, TestFetcher};
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub(crate) const MANUAL_TEMPLATE: &str =
    "Manual tests live in {tests_dir}.\nRead every file in {tests_dir}.\nWrite coverage to {output}.\n";

pub(crate) const AUTOMATED_TEMPLATE: &str =
    "E2E tests live in {tests_dir}.\nWrite coverage to {output}.\n";

/// A scratch root laid out as `cwd/`, `tmp/` and `prompts/`.
pub(crate) struct TestSession {
    root: TempDir,
    pub(crate) ctx: SessionContext,
}

impl TestSession {
    /// Session with both templates installed and no API key in the environment.
    pub(crate) fn new() -> Self {
        Self::with_env(MapEnv::new())
    }

    /// Session whose environment carries `TESTOMATIO=<key>`.
    pub(crate) fn with_api_key_env(key: &str) -> Self {
        Self::with_env(MapEnv::new().with(API_KEY_ENV, key))
    }

    pub(crate) fn with_env(env: MapEnv) -> Self {
        let root = TempDir::new().unwrap();
        let ctx = SessionContext::new(
            root.path().join("cwd"),
            root.path().join("tmp"),
            root.path().join("prompts"),
            Box::new(env),
        );
        fs::create_dir_all(&ctx.cwd).unwrap();
        fs::create_dir_all(&ctx.temp_root).unwrap();
        fs::create_dir_all(&ctx.template_dir).unwrap();
        fs::write(template_path(Mode::Manual, &ctx), MANUAL_TEMPLATE).unwrap();
        fs::write(template_path(Mode::Automated, &ctx), AUTOMATED_TEMPLATE).unwrap();
        Self { root, ctx }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn remove_template(&self, mode: Mode) {
        fs::remove_file(template_path(mode, &self.ctx)).unwrap();
    }

    /// Names of the entries directly under `dir`, sorted.
    pub(crate) fn entries(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}

/// A fetcher that records calls and writes one file per call.
#[derive(Default)]
pub(crate) struct RecordingFetcher {
    pub(crate) calls: RefCell<Vec<(String, PathBuf)>>,
    pub(crate) fail_with: Option<String>,
}

impl RecordingFetcher {
    pub(crate) fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl TestFetcher for RecordingFetcher {
    fn fetch(&self, api_key: &str, target_dir: &Path) -> Result<PullSummary> {
        self.calls
            .borrow_mut()
            .push((api_key.to_string(), target_dir.to_path_buf()));
        if let Some(message) = &self.fail_with {
            return Err(CoverageError::Fetch(message.clone()));
        }
        fs::write(target_dir.join("pulled.md"), "# Pulled test\n").unwrap();
        Ok(PullSummary { files_written: 1 })
    }
}
