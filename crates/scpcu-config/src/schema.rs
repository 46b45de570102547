//! Configuration record definition.

use crate::defaults::TOKEN_KEY;
use scpcu_common::ScpError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Configuration record for the bot.
///
/// A flat mapping of string keys to string values. Only [`TOKEN_KEY`] is
/// required; other keys are carried through untouched.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    entries: HashMap<String, String>,
}

impl Config {
    /// Creates a configuration record from raw entries.
    pub const fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Looks up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the platform credential.
    pub fn token(&self) -> Result<&str, ScpError> {
        self.get(TOKEN_KEY)
            .ok_or_else(|| ScpError::Config(format!("missing required key `{TOKEN_KEY}`")))
    }

    /// Returns the underlying mapping.
    pub const fn as_map(&self) -> &HashMap<String, String> {
        &self.entries
    }

    /// Consumes the record and returns the underlying mapping.
    pub fn into_map(self) -> HashMap<String, String> {
        self.entries
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ScpError> {
        self.token().map(|_| ())
    }
}

impl From<HashMap<String, String>> for Config {
    fn from(entries: HashMap<String, String>) -> Self {
        Self::new(entries)
    }
}

// Keeps the token out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        f.debug_struct("Config").field("keys", &keys).finish()
    }
}
