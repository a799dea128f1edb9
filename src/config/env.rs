//! Environment accessors.

use std::collections::HashMap;

/// Read access to environment variables.
pub trait EnvSource {
    /// Returns the value of `key`, or `None` if it is unset or not valid UTF-8.
    fn var(&self, key: &str) -> Option<String>;

    /// Like [`EnvSource::var`], but treats an empty value as unset.
    fn non_empty_var(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// Reads from the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed set of variables, used in tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
