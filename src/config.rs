//! Configuration for the scheduler server
//!
//! Centralized configuration with sensible defaults. Only the bootstrap
//! (listener + store seeding) reads it; sessions take no configuration.

use std::path::PathBuf;

/// Default TCP port of the scheduler service
pub const DEFAULT_PORT: u16 = 8432;

/// Main configuration for a scheduler server instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// TCP listen address
    pub listen_addr: String,

    /// Disable Nagle's algorithm on accepted connections
    pub nodelay: bool,

    // -------------------------------------------------------------------------
    // Data Configuration
    // -------------------------------------------------------------------------
    /// Directory holding `lecturers.json` and `subjects.json`.
    /// `None` seeds the store from the built-in dataset.
    pub fixtures_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: format!("127.0.0.1:{}", DEFAULT_PORT),
            nodelay: true,
            fixtures_dir: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the TCP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Enable or disable TCP_NODELAY on accepted connections
    pub fn nodelay(mut self, enabled: bool) -> Self {
        self.config.nodelay = enabled;
        self
    }

    /// Seed the store from JSON fixtures in this directory
    pub fn fixtures_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.fixtures_dir = Some(path.into());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
