//! Configuration for Libris
//!
//! Centralized configuration with sensible defaults. Nothing is read from
//! files or the environment; the binary maps its CLI flags onto the builder.

use crate::error::{LibrisError, Result};

/// Default catalog capacity
pub const DEFAULT_MAX_CAPACITY: usize = 10;

/// Main configuration for a Libris catalog and console session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Catalog Configuration
    // -------------------------------------------------------------------------
    /// Maximum number of books the catalog may hold at once
    pub max_capacity: usize,

    // -------------------------------------------------------------------------
    // Console Configuration
    // -------------------------------------------------------------------------
    /// Wait for Enter after every menu operation
    pub pause_after_operation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_capacity: DEFAULT_MAX_CAPACITY,
            pause_after_operation: true,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check that the configuration describes a usable catalog
    pub fn validate(&self) -> Result<()> {
        if self.max_capacity == 0 {
            return Err(LibrisError::Config(
                "max_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the maximum number of books
    pub fn max_capacity(mut self, capacity: usize) -> Self {
        self.config.max_capacity = capacity;
        self
    }

    /// Enable or disable the "press Enter to continue" pause
    pub fn pause_after_operation(mut self, pause: bool) -> Self {
        self.config.pause_after_operation = pause;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
