//! coverage-agent: prepares Testomat.io test-coverage prompts for Claude Code.
//!
//! The crate resolves an API key, locates a tests directory, optionally pulls
//! manual tests from Testomat.io, renders a per-mode prompt file and reports
//! the command that hands it to the agent.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod mode;
pub mod prompt;
pub mod pull;
pub mod report;
pub mod workspace;

#[cfg(test)]
mod test_support;

pub use config::{prompt_for_api_key, resolve_api_key};
pub use mode::Mode;
