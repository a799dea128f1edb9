//! API key resolution.

use super::API_KEY_ENV;
use super::env::EnvSource;
use std::io::{self, BufRead, Write};

/// Resolve the Testomat.io API key.
///
/// Precedence: a non-empty `explicit` value, then a non-empty `TESTOMATIO`
/// variable from `env`. Returns `None` when neither is available.
pub fn resolve_api_key(explicit: Option<&str>, env: &dyn EnvSource) -> Option<String> {
    if let Some(key) = explicit.filter(|k| !k.is_empty()) {
        return Some(key.to_string());
    }
    env.non_empty_var(API_KEY_ENV)
}

/// Ask for an API key interactively.
///
/// Writes a prompt to `output` and reads a single line from `input`. The
/// trailing line ending is stripped; an empty string is returned on EOF.
/// Neither subcommand calls this; it is offered for embedding tools.
pub fn prompt_for_api_key<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<String> {
    write!(output, "Enter Testomatio API key: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let trimmed_len = answer.trim_end_matches(['\r', '\n']).len();
    answer.truncate(trimmed_len);
    Ok(answer)
}
