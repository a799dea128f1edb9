//! Placeholder substitution for prompt templates.
//!
//! Unlike a general template engine, unknown `{name}` tokens are not an
//! error: prompt templates routinely contain braces in code and YAML samples,
//! and only the named placeholders are meant to change.
//!
//! Substitution is a single left-to-right pass. A substituted value is never
//! scanned again, so a workspace path that happens to contain `{output}`
//! stays literal.

use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Name of the placeholder replaced with the workspace directory.
pub const TESTS_DIR_PLACEHOLDER: &str = "tests_dir";

/// Name of the placeholder replaced with the coverage output file name.
pub const OUTPUT_PLACEHOLDER: &str = "output";

static PLACEHOLDER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("Invalid placeholder regex")
});

/// Replace every `{name}` whose name is in `variables`.
///
/// # Examples
///
/// ```
/// use coverage_agent::prompt::{substitute_placeholders, vars};
///
/// let vars = vars([("tests_dir", "/tmp/tests"), ("output", "coverage.yml")]);
/// let result = substitute_placeholders("Read {tests_dir}, write {output}, keep {other}", &vars);
/// assert_eq!(result, "Read /tmp/tests, write coverage.yml, keep {other}");
/// ```
pub fn substitute_placeholders(template: &str, variables: &HashMap<String, String>) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures<'_>| match variables.get(&caps[1]) {
            Some(value) => value.clone(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Helper to create a variables map from a list of key-value pairs.
pub fn vars<I, K, V>(pairs: I) -> HashMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
