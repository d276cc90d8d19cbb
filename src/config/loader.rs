//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading mini-job
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{Limits, MinijobConfig, RateConfig};

/// Loads and provides access to a mini-job configuration.
///
/// # Directory Structure
///
/// ```text
/// config/minijob_2025/
/// ├── limits.yaml   # Metadata, minimum wage, threshold, hour limits
/// └── rates.yaml    # Deduction and surcharge rates
/// ```
///
/// # Example
///
/// ```no_run
/// use minijob_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/minijob_2025").unwrap();
/// println!("Threshold: {} EUR", loader.config().threshold());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: MinijobConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The values are inconsistent (e.g., a rate outside `[0, 1]`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let limits_path = path.join("limits.yaml");
        let limits = Self::load_yaml::<Limits>(&limits_path)?;

        let rates_path = path.join("rates.yaml");
        let rates = Self::load_yaml::<RateConfig>(&rates_path)?;

        let config = MinijobConfig::new(limits, rates);
        config
            .check_consistency()
            .map_err(|message| EngineError::ConfigParseError {
                path: path.display().to_string(),
                message,
            })?;

        debug!(
            name = %config.limits().name,
            threshold = %config.threshold(),
            minimum_wage = %config.minimum_wage(),
            "Loaded mini-job configuration"
        );

        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: MinijobConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &MinijobConfig {
        &self.config
    }
}
