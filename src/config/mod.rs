//! Configuration loading and management for the pricing engine.
//!
//! This module provides functionality to load rate tables and opening hours
//! from YAML files, or to fall back to the built-in house rates.
//!
//! # Example
//!
//! ```no_run
//! use cue_rates::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/pool_hall").unwrap();
//! println!("Loaded venue: {}", config.facility().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    FacilityConfig, FacilityMetadata, OperatingWindow, PricingConfig, RateSegment, RateTable,
};
