//! Configuration loading from the JSON config file.

use crate::defaults::CONFIG_FILE_NAME;
use crate::schema::Config;
use scpcu_common::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads the configuration record from a JSON file.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and parses the file.
    ///
    /// Fails with an I/O error if the file is missing and a serialization
    /// error if it is not a JSON object of strings. Nothing is defaulted.
    pub async fn load(&self) -> Result<Config> {
        debug!("Loading config from {}", self.path.display());
        let content = tokio::fs::read_to_string(&self.path).await?;
        let config: Config = serde_json::from_str(&content)?;
        debug!("Loaded {} config keys", config.as_map().len());
        Ok(config)
    }

    /// Reads the file and checks that every required key is present.
    pub async fn load_validated(&self) -> Result<Config> {
        let config = self.load().await?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(CONFIG_FILE_NAME)
    }
}
