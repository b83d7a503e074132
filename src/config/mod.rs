//! Configuration loading and management for the Leave Entitlement Engine.
//!
//! Statutory thresholds change every tax year, so they live in versioned
//! YAML rates tables rather than in code. Built-in defaults for the current
//! tax year are available through [`StatutoryRates::default`].
//!
//! # Example
//!
//! ```no_run
//! use leave_entitlement_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/uk_statutory").unwrap();
//! println!("Loaded {} rates versions", config.table().versions().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{RatesTable, StatutoryRates};
