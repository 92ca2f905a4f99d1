//! Server configuration from environment variables.
//!
//! # Variables
//! - `INVENTORY_HOST`: bind address (default `0.0.0.0`).
//! - `PORT`: bind port (default `3000`).
//! - `INVENTORY_DB_PATH`: SQLite file (default `inventory.sqlite3`, `:memory:`
//!   for a throwaway store).
//! - `INVENTORY_LOG_LEVEL`: `trace|debug|info|warn|error` (default depends on
//!   build mode).
//! - `INVENTORY_LOG_DIR`: absolute directory for rolling log files; logs go to
//!   stderr when unset.
//!
//! Empty values are treated as unset.

use inventory_core::db::DbLocation;
use inventory_core::default_log_level;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const HOST_VAR: &str = "INVENTORY_HOST";
pub const PORT_VAR: &str = "PORT";
pub const DB_PATH_VAR: &str = "INVENTORY_DB_PATH";
pub const LOG_LEVEL_VAR: &str = "INVENTORY_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "INVENTORY_LOG_DIR";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DB_PATH: &str = "inventory.sqlite3";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidHost(String),
    InvalidPort(String),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidHost(value) => {
                write!(f, "{HOST_VAR} must be an IP address, got `{value}`")
            }
            Self::InvalidPort(value) => {
                write!(f, "{PORT_VAR} must be a number in 0..=65535, got `{value}`")
            }
        }
    }
}

impl Error for ConfigError {}

/// Runtime settings for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub db_location: DbLocation,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl ServerConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let host = match read(HOST_VAR) {
            Some(value) => value
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::InvalidHost(value))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let port = match read(PORT_VAR) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        let db_location = DbLocation::from_path_setting(
            read(DB_PATH_VAR).as_deref().unwrap_or(DEFAULT_DB_PATH),
        );

        Ok(Self {
            host,
            port,
            db_location,
            log_level: read(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: read(LOG_DIR_VAR),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
