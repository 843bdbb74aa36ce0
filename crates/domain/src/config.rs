//! Application configuration
//!
//! Configuration is environment-first: every field has a default suitable
//! for local use and can be overridden with a `TABTALLY_*` variable.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, TabTallyError};

/// Event store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Path of the SQLite database file.
    pub path: PathBuf,
    /// Maximum connections held by the pool.
    pub pool_size: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self { path: PathBuf::from("tabtally.db"), pool_size: 4 }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Socket address string the listener binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".to_string(), port: 8080 }
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    /// Build the configuration from the process environment.
    ///
    /// Unset variables fall back to defaults; set-but-unparsable numeric
    /// variables are a configuration error rather than a silent fallback.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(path) = env::var("TABTALLY_DB_PATH") {
            config.database.path = PathBuf::from(path);
        }
        if let Some(pool_size) = parse_var::<u32>("TABTALLY_DB_POOL_SIZE")? {
            config.database.pool_size = pool_size.max(1);
        }
        if let Ok(host) = env::var("TABTALLY_HOST") {
            config.server.host = host;
        }
        if let Some(port) = parse_var::<u16>("TABTALLY_PORT")? {
            config.server.port = port;
        }

        Ok(config)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|_| TabTallyError::Config(format!("{name} has invalid value: {raw}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = AppConfig::default();
        assert_eq!(config.database.pool_size, 4);
        assert_eq!(config.server.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn parse_var_rejects_garbage() {
        // Process-wide env mutation: use a name no other test touches.
        std::env::set_var("TABTALLY_TEST_BAD_PORT", "not-a-number");
        let result = parse_var::<u16>("TABTALLY_TEST_BAD_PORT");
        assert!(result.is_err());
        std::env::remove_var("TABTALLY_TEST_BAD_PORT");
    }
}
