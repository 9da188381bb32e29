//! Application state for the pricing API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PricingConfig};

/// Shared application state.
///
/// The pricing configuration is immutable, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the pricing configuration.
    pub fn config(&self) -> &PricingConfig {
        self.config.config()
    }
}
