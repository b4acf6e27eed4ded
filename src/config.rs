//! Configuration for meteoq
//!
//! Centralized configuration with sensible defaults. Plain data; the
//! binaries translate CLI flags into a `Config`.

use crate::protocol::{WireFormat, MAX_DATAGRAM};

/// Main configuration for a meteoq server instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// UDP listen address (host:port)
    pub listen_addr: String,

    /// Largest request datagram accepted, in bytes
    pub max_datagram: usize,

    // -------------------------------------------------------------------------
    // Protocol Configuration
    // -------------------------------------------------------------------------
    /// Which response wire form this endpoint speaks
    pub wire_format: WireFormat,

    // -------------------------------------------------------------------------
    // Forecast Configuration
    // -------------------------------------------------------------------------
    /// Fixed seed for the value generator; entropy-seeded when `None`
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:27015".to_string(),
            max_datagram: MAX_DATAGRAM,
            wire_format: WireFormat::Binary,
            seed: None,
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
    /// Set the UDP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    /// Set the largest accepted request datagram (in bytes)
    pub fn max_datagram(mut self, size: usize) -> Self {
        self.config.max_datagram = size;
        self
    }

    /// Set the response wire form
    pub fn wire_format(mut self, format: WireFormat) -> Self {
        self.config.wire_format = format;
        self
    }

    /// Set a fixed seed for the value generator
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
