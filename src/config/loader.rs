//! Configuration loading functionality.
//!
//! This module provides loading of [`EngineConfig`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

impl EngineConfig {
    /// Loads configuration from a YAML file.
    ///
    /// Missing fields fall back to their defaults, so a partial file (or
    /// an empty mapping) is valid. Embedded use and tests can skip the
    /// file entirely with [`EngineConfig::default`].
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/engine.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if:
    /// - The file does not exist (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use sh_engine::config::EngineConfig;
    ///
    /// let config = EngineConfig::load("./config/engine.yaml")?;
    /// # Ok::<(), sh_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
