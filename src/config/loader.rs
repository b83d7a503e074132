//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading versioned
//! statutory rates tables from YAML files.

use chrono::NaiveDate;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{RatesTable, StatutoryRates};

/// Loads and provides access to statutory rates configuration.
///
/// # Directory Structure
///
/// ```text
/// config/uk_statutory/
/// └── rates/
///     ├── 2024-04-07.yaml  # Rates effective from this date
///     └── 2025-04-06.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_entitlement_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/uk_statutory").unwrap();
/// let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
/// let rates = loader.rates_for(date).unwrap();
/// println!("Flat rate: £{}", rates.statutory_weekly_rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    table: RatesTable,
}

impl ConfigLoader {
    /// Loads every rates file from `path/rates`.
    ///
    /// Returns an error if the rates directory is missing or empty, or if any
    /// file contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let rates_dir = path.as_ref().join("rates");
        let versions = Self::load_rates(&rates_dir)?;

        tracing::debug!(
            path = %rates_dir.display(),
            versions = versions.len(),
            "Loaded statutory rates"
        );

        Ok(Self {
            table: RatesTable::new(versions),
        })
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

    /// Loads all rate files from the rates directory.
    fn load_rates(rates_dir: &Path) -> EngineResult<Vec<StatutoryRates>> {
        let rates_dir_str = rates_dir.display().to_string();

        if !rates_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: rates_dir_str,
            });
        }

        let entries = fs::read_dir(rates_dir).map_err(|_| EngineError::ConfigNotFound {
            path: rates_dir_str.clone(),
        })?;

        let mut rates = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: rates_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                rates.push(Self::load_yaml::<StatutoryRates>(&path)?);
            }
        }

        if rates.is_empty() {
            return Err(EngineError::ConfigNotFound {
                path: format!("{} (no rate files found)", rates_dir_str),
            });
        }

        Ok(rates)
    }

    /// Returns the loaded rates table.
    pub fn table(&self) -> &RatesTable {
        &self.table
    }

    /// Gets the rates effective on the given date.
    pub fn rates_for(&self, date: NaiveDate) -> EngineResult<&StatutoryRates> {
        self.table.rates_for(date)
    }
}
