//! Blocking HTTP client for the Testomat.io test-data endpoint.

use super::files::write_pulled_files;
use super::{PullSummary, TestFetcher};
use crate::error::{CoverageError, Result};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

const TEST_DATA_PATH: &str = "/api/test_data";
const ERROR_BODY_LIMIT: usize = 160;

/// Body of a successful test-data response.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PullResponse {
    /// Test files keyed by path relative to the tests directory.
    #[serde(default)]
    pub files: BTreeMap<String, String>,
}

/// Pulls manual test definitions as Markdown files.
///
/// The underlying HTTP client is only built when [`TestFetcher::fetch`] runs,
/// so constructing this costs nothing on paths that never pull.
#[derive(Debug, Clone)]
pub struct TestomatioClient {
    base_url: String,
}

impl TestomatioClient {
    /// Creates a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), TEST_DATA_PATH)
    }

    fn create_http_client(&self) -> Result<Client> {
        Client::builder().build().map_err(|e| {
            CoverageError::Fetch(format!("failed to configure HTTP client: {}", e))
        })
    }
}

impl TestFetcher for TestomatioClient {
    fn fetch(&self, api_key: &str, target_dir: &Path) -> Result<PullSummary> {
        let endpoint = self.endpoint();
        debug!(%endpoint, "requesting test data");

        // reqwest errors carry the request URL, which includes the API key;
        // strip it before anything reaches a message.
        let response = self
            .create_http_client()?
            .get(&endpoint)
            .query(&[("api_key", api_key), ("format", "markdown")])
            .send()
            .map_err(|e| {
                CoverageError::Fetch(format!("request to {} failed: {}", endpoint, e.without_url()))
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().map_or_else(
                |_| "(failed to read error response body)".to_string(),
                |content| truncate_for_message(&content, ERROR_BODY_LIMIT),
            );
            return Err(CoverageError::Fetch(format!(
                "server responded with status {}: {}",
                status.as_u16(),
                body
            )));
        }

        let payload: PullResponse = response
            .json()
            .map_err(|e| {
                CoverageError::Fetch(format!("invalid test data response: {}", e.without_url()))
            })?;

        let files_written = write_pulled_files(target_dir, &payload.files)?;
        Ok(PullSummary { files_written })
    }
}

fn truncate_for_message(text: &str, limit: usize) -> String {
    let trimmed = text.trim();
    match trimmed.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
