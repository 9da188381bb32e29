//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pricing
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{PricingError, PricingResult};

use super::types::{FacilityConfig, FacilityMetadata, OperatingWindow, PricingConfig, RateTable};

/// Loads and provides access to a pricing configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/pool_hall/
/// ├── facility.yaml   # Venue name, currency and operating window
/// └── rates.yaml      # Rate segments per day classification
/// ```
///
/// # Example
///
/// ```no_run
/// use cue_rates::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/pool_hall").unwrap();
/// println!("Loaded rates for: {}", loader.facility().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PricingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The rate table disagrees with the operating window (`InvalidRateTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> PricingResult<Self> {
        let path = path.as_ref();

        let facility = Self::load_yaml::<FacilityConfig>(&path.join("facility.yaml"))?;
        let rates = Self::load_yaml::<RateTable>(&path.join("rates.yaml"))?;

        let config = PricingConfig::new(facility.metadata, facility.operating_window, rates)?;
        debug!(path = %path.display(), facility = %config.facility().name, "Loaded pricing configuration");

        Ok(Self { config })
    }

    /// Uses the built-in house rates without touching the filesystem.
    pub fn builtin() -> Self {
        Self {
            config: PricingConfig::standard(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PricingResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PricingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PricingError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Returns the venue metadata.
    pub fn facility(&self) -> &FacilityMetadata {
        self.config.facility()
    }

    /// Returns the operating window.
    pub fn window(&self) -> &OperatingWindow {
        self.config.window()
    }

    /// Returns the rate table.
    pub fn rates(&self) -> &RateTable {
        self.config.rates()
    }
}
