//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Environment variable naming the station data file.
pub const DATA_PATH_VAR: &str = "STATIONS_DATA_PATH";

/// Environment variable naming the address to listen on.
pub const BIND_ADDR_VAR: &str = "STATIONS_BIND_ADDR";

/// Error from reading the configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The bind address could not be parsed
    #[error("invalid STATIONS_BIND_ADDR {value:?}: expected host:port")]
    InvalidBindAddr { value: String },
}

/// Configuration for the station server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// JSON-lines file of station records, re-read on every request.
    pub data_path: PathBuf,

    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(data_path: impl Into<PathBuf>, bind_addr: SocketAddr) -> Self {
        Self {
            data_path: data_path.into(),
            bind_addr,
        }
    }

    /// Set the station data file.
    pub fn with_data_path(mut self, data_path: impl Into<PathBuf>) -> Self {
        self.data_path = data_path.into();
        self
    }

    /// Set the bind address.
    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }

    /// Read the configuration from the process environment.
    ///
    /// Unset variables fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through a variable lookup function.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup(DATA_PATH_VAR).filter(|p| !p.is_empty()) {
            config = config.with_data_path(path);
        }

        if let Some(value) = lookup(BIND_ADDR_VAR).filter(|v| !v.is_empty()) {
            let addr = value
                .parse()
                .map_err(|_| ConfigError::InvalidBindAddr { value })?;
            config = config.with_bind_addr(addr);
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("output_priority.json"),
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}
