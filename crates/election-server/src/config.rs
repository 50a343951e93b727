//! Server configuration loaded from environment variables.
//!
//! - `PORT`: listen port (default `3001`)
//! - `ELECTION_HOST`: bind host (default `0.0.0.0`)
//! - `ELECTION_DB_PATH`: SQLite database file (default `db/election.db`)

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::{info, warn};

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_DB_PATH: &str = "db/election.db";

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub db_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            db_path: DEFAULT_DB_PATH.to_string(),
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup. Missing or
    /// unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: load(&lookup, "ELECTION_HOST", DEFAULT_HOST.to_string()),
            port: load(&lookup, "PORT", DEFAULT_PORT),
            db_path: load(&lookup, "ELECTION_DB_PATH", DEFAULT_DB_PATH.to_string()),
        }
    }

    /// The `host:port` address to bind.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
            warn!("Invalid {key} value {raw:?}: {e}, using default: {default}");
            default
        }),
        None => {
            info!("{key} not set, using default: {default}");
            default
        }
    }
}
