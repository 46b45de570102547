//! Runtime data file handling.
//!
//! The file is reserved for persisted bot state. Its schema is not fixed,
//! so the contents are kept as an opaque JSON object.

use crate::defaults::RUNTIME_DATA_FILE_NAME;
use scpcu_common::Result;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};

/// Opaque contents of the runtime data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuntimeData {
    entries: Map<String, Value>,
}

impl RuntimeData {
    /// Looks up a top-level entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Sets a top-level entry, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.entries.insert(key.into(), value)
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the file held nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Reads and writes the runtime data file.
#[derive(Debug, Clone)]
pub struct RuntimeDataStore {
    path: PathBuf,
}

impl RuntimeDataStore {
    /// Creates a store bound to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this store reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file, falling back to an empty record.
    ///
    /// A missing file is expected on first run. A file that exists but
    /// cannot be read or parsed is logged and ignored.
    pub async fn load(&self) -> RuntimeData {
        debug!("Loading runtime data from {}", self.path.display());
        match tokio::fs::try_exists(&self.path).await {
            Ok(true) => {}
            Ok(false) => {
                warn!("Runtime data file does not exist, defaulting to empty");
                return RuntimeData::default();
            }
            Err(e) => {
                error!("Could not check for runtime data file: {}", e);
                return RuntimeData::default();
            }
        }

        match self.read().await {
            Ok(data) => data,
            Err(e) => {
                error!("Runtime data file exists but could not be read: {}", e);
                warn!("Defaulting to empty runtime data");
                RuntimeData::default()
            }
        }
    }

    /// Writes `data` to the file, replacing its contents.
    pub async fn save(&self, data: &RuntimeData) -> Result<()> {
        let content = serde_json::to_string_pretty(data)?;
        tokio::fs::write(&self.path, content).await?;
        debug!("Saved runtime data to {}", self.path.display());
        Ok(())
    }

    async fn read(&self) -> Result<RuntimeData> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl Default for RuntimeDataStore {
    fn default() -> Self {
        Self::new(RUNTIME_DATA_FILE_NAME)
    }
}
