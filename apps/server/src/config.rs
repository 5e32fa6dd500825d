//! # Server Configuration
//!
//! ## Loading Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Defaults            0.0.0.0:3000, :memory:, sample tools on         │
//! │  2. TOML file           $TOOLRENT_CONFIG or <config dir>/server.toml    │
//! │  3. Environment         TOOLRENT_HOST, TOOLRENT_PORT, TOOLRENT_DB_PATH, │
//! │                         TOOLRENT_DB_MAX_CONNECTIONS,                    │
//! │                         TOOLRENT_SEED_SAMPLE_TOOLS                      │
//! │  4. validate()                                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example File
//! ```toml
//! host = "127.0.0.1"
//! port = 8080
//! seed_sample_tools = false
//!
//! [database]
//! path = "/var/lib/toolrent/toolrent.db"
//! max_connections = 5
//! ```

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

use toolrent_db::{DbConfig, IN_MEMORY_PATH};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "TOOLRENT_CONFIG";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,

    /// TCP port to listen on.
    pub port: u16,

    /// Insert the sample catalog when the store starts empty.
    pub seed_sample_tools: bool,

    pub database: DatabaseSettings,
}

/// Store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite file path, or `:memory:` for a store that lives as long as the process.
    pub path: String,

    /// Pool size for file databases. In-memory stores always use one connection.
    pub max_connections: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            seed_sample_tools: true,
            database: DatabaseSettings::default(),
        }
    }
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        DatabaseSettings {
            path: IN_MEMORY_PATH.to_string(),
            max_connections: 5,
        }
    }
}

impl ServerConfig {
    /// Loads configuration: defaults, then file, then environment.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading server config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::Invalid("port must be greater than 0".into()));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.max_connections must be greater than 0".into(),
            ));
        }

        if self.database.path.trim().is_empty() {
            return Err(ConfigError::Invalid("database.path must not be empty".into()));
        }

        self.host
            .parse::<IpAddr>()
            .map_err(|_| ConfigError::Invalid(format!("host '{}' is not an IP address", self.host)))?;

        Ok(())
    }

    /// The address to bind.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("host '{}' is not an IP address", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Store settings as a pool configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database.path).max_connections(self.database.max_connections)
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `TOOLRENT_*` overrides from `lookup`. Unparseable values are
    /// logged and ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("TOOLRENT_HOST") {
            debug!(host = %host, "Overriding host from environment");
            self.host = host;
        }

        if let Some(port) = lookup("TOOLRENT_PORT") {
            match port.parse::<u16>() {
                Ok(p) => self.port = p,
                Err(_) => warn!(value = %port, "Ignoring invalid TOOLRENT_PORT"),
            }
        }

        if let Some(path) = lookup("TOOLRENT_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database.path = path;
        }

        if let Some(max) = lookup("TOOLRENT_DB_MAX_CONNECTIONS") {
            match max.parse::<u32>() {
                Ok(m) => self.database.max_connections = m,
                Err(_) => warn!(value = %max, "Ignoring invalid TOOLRENT_DB_MAX_CONNECTIONS"),
            }
        }

        if let Some(seed) = lookup("TOOLRENT_SEED_SAMPLE_TOOLS") {
            match seed.to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => self.seed_sample_tools = true,
                "0" | "false" | "no" | "off" => self.seed_sample_tools = false,
                _ => warn!(value = %seed, "Ignoring invalid TOOLRENT_SEED_SAMPLE_TOOLS"),
            }
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "toolrent", "toolrent")
            .map(|dirs| dirs.config_dir().join("server.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.database.path, ":memory:");
        assert!(config.seed_sample_tools);
        assert!(config.validate().is_ok());
        assert!(config.db_config().is_in_memory());
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: ServerConfig = toml::from_str(
            r#"
            port = 8080
            [database]
            path = "/tmp/toolrent.db"
            "#,
        )
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.database.path, "/tmp/toolrent.db");
        assert_eq!(config.database.max_connections, 5);
        assert!(!config.db_config().is_in_memory());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ServerConfig::default();
        config.apply_overrides(env(&[
            ("TOOLRENT_HOST", "127.0.0.1"),
            ("TOOLRENT_PORT", "9000"),
            ("TOOLRENT_DB_PATH", "/data/rent.db"),
            ("TOOLRENT_DB_MAX_CONNECTIONS", "8"),
            ("TOOLRENT_SEED_SAMPLE_TOOLS", "false"),
        ]));

        assert_eq!(config.socket_addr().unwrap().to_string(), "127.0.0.1:9000");
        assert_eq!(config.database.path, "/data/rent.db");
        assert_eq!(config.db_config().max_connections, 8);
        assert!(!config.seed_sample_tools);
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let mut config = ServerConfig::default();
        config.apply_overrides(env(&[
            ("TOOLRENT_PORT", "eighty"),
            ("TOOLRENT_SEED_SAMPLE_TOOLS", "maybe"),
        ]));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_validation_rejects_zeroes() {
        let mut config = ServerConfig::default();
        config.port = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ServerConfig::default();
        config.database.max_connections = 0;
        assert!(config.validate().is_err());

        let mut config = ServerConfig::default();
        config.host = "not-an-ip".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config =
            ServerConfig::load(Some(PathBuf::from("/nonexistent/toolrent/server.toml"))).unwrap();
        assert_eq!(config.port, ServerConfig::default().port);
    }
}
