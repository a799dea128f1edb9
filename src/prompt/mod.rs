//! Prompt generation for the downstream coverage agent.
//!
//! This module provides:
//!
//! - **Template**: placeholder substitution
//! - **Generator**: locating the per-mode template and writing the rendered prompt
//!
//! # Template Syntax
//!
//! Templates are Markdown with two placeholders:
//!
//! ```text
//! Analyse the tests in {tests_dir} and write the report to {output}.
//! ```
//!
//! Every occurrence is replaced. Any other brace usage (code samples, YAML
//! snippets) is left untouched.

mod generator;
mod template;

pub use generator::{PromptStatus, RenderedPrompt, render_prompt, rendered_prompt_path, template_path};
pub use template::{OUTPUT_PLACEHOLDER, TESTS_DIR_PLACEHOLDER, substitute_placeholders, vars};
