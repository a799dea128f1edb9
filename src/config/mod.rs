//! Configuration resolution for coverage-agent.
//!
//! This module turns command-line input and the process environment into a
//! [`Configuration`]. The environment is always read through an [`EnvSource`]
//! so resolution stays deterministic under test.

mod credential;
mod env;
mod model;


// Re-export public API
pub use credential::{prompt_for_api_key, resolve_api_key};
pub use env::{EnvSource, MapEnv, ProcessEnv};
pub use model::Configuration;

/// Environment variable carrying the Testomat.io API key.
pub const API_KEY_ENV: &str = "TESTOMATIO";

/// Environment variable overriding the Testomat.io base URL.
pub const SERVICE_URL_ENV: &str = "TESTOMATIO_URL";

/// Environment variable overriding the prompt template directory.
pub const PROMPTS_DIR_ENV: &str = "COVERAGE_AGENT_PROMPTS_DIR";
