//! Server configuration module.
//!
//! This module provides configuration loading for the mock server from
//! environment variables.
//!
//! # Environment Variables
//!
//! - `PORT`: Port to listen on (default: `3000`)
//! - `DB_FILE`: JSON dataset served by the server (default: `db.json`)
//!
//! # Invariants
//!
//! - `listen_port` is always a valid port number (1-65535)
//! - `data_file` is always a path (may not exist yet, checked when the store loads)

use std::path::PathBuf;

/// Server configuration.
///
/// # Post-conditions
///
/// - `listen_port` is always in the valid range (1-65535)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// JSON file holding the collections, read once at startup.
    pub data_file: PathBuf,
    /// Port to listen on for HTTP connections.
    pub listen_port: u16,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    /// Default port for the server.
    pub const DEFAULT_PORT: u16 = 3000;
    /// Default dataset location, relative to the working directory.
    pub const DEFAULT_DATA_FILE: &'static str = "db.json";

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// `from_env` delegates here; tests pass a closure over a fixed table
    /// instead of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_file = lookup("DB_FILE")
            .filter(|value| !value.is_empty())
            .map_or_else(|| PathBuf::from(Self::DEFAULT_DATA_FILE), PathBuf::from);
        let listen_port = Self::parse_listen_port(lookup("PORT"))?;

        Ok(Self {
            data_file,
            listen_port,
        })
    }

    /// Parse the listen port.
    ///
    /// Returns the default if not set.
    fn parse_listen_port(value: Option<String>) -> Result<u16, ConfigError> {
        let Some(value) = value else {
            return Ok(Self::DEFAULT_PORT);
        };
        match value.trim().parse::<u16>() {
            Ok(port) if port != 0 => Ok(port),
            _ => Err(ConfigError::InvalidValue {
                name: "PORT".to_string(),
                message: format!("'{value}' is not a valid port number (must be 1-65535)"),
            }),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(Self::DEFAULT_DATA_FILE),
            listen_port: Self::DEFAULT_PORT,
        }
    }
}
