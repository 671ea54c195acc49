//! Runtime configuration for listkeeper.
//!
//! Configuration comes from the process environment, optionally populated
//! from a `.env` file by `dotenv` at startup, and can be overridden by CLI
//! flags.
//!
//! | Variable | Meaning | Default |
//! |---|---|---|
//! | `DB_PATH` | database file | `listkeeper.db` in the platform data directory |
//! | `LISTKEEPER_IN_MEMORY` | use an ephemeral in-memory database | off |
//! | `LISTKEEPER_HOST` | HTTP bind host | `127.0.0.1` |
//! | `LISTKEEPER_PORT` | HTTP bind port | `8080` |
//!
//! ```rust,no_run
//! use listkeeper::libs::config::Config;
//!
//! let config = Config::from_env()?;
//! println!("serving on {}", config.address());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use std::fmt;
use std::path::PathBuf;

pub const DB_FILE_NAME: &str = "listkeeper.db";
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

pub const ENV_DB_PATH: &str = "DB_PATH";
pub const ENV_IN_MEMORY: &str = "LISTKEEPER_IN_MEMORY";
pub const ENV_HOST: &str = "LISTKEEPER_HOST";
pub const ENV_PORT: &str = "LISTKEEPER_PORT";

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseLocation {
    File(PathBuf),
    InMemory,
}

impl fmt::Display for DatabaseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseLocation::File(path) => write!(f, "{}", path.display()),
            DatabaseLocation::InMemory => write!(f, ":memory:"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Explicit database file; `None` falls back to the platform data directory
    pub db_path: Option<PathBuf>,
    /// Development override: ignore any path and use an in-memory database
    pub in_memory: bool,
    pub host: String,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: None,
            in_memory: false,
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let port = match get(ENV_PORT) {
            Some(value) => match value.parse::<u16>() {
                Ok(port) => port,
                Err(_) => msg_bail_anyhow!(Message::ConfigInvalidPort(value)),
            },
            None => DEFAULT_PORT,
        };

        Ok(Config {
            db_path: get(ENV_DB_PATH).map(PathBuf::from),
            in_memory: get(ENV_IN_MEMORY).map(|v| parse_flag(&v)).unwrap_or(false),
            host: get(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
        })
    }

    /// Resolves the database location; the in-memory override wins over any path.
    pub fn database(&self) -> Result<DatabaseLocation> {
        if self.in_memory {
            return Ok(DatabaseLocation::InMemory);
        }
        match &self.db_path {
            Some(path) => Ok(DatabaseLocation::File(path.clone())),
            None => Ok(DatabaseLocation::File(DataStorage::new().get_path(DB_FILE_NAME)?)),
        }
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Interprets common spellings of a boolean switch.
pub fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_flag_spellings() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" yes "));
        assert!(parse_flag("on"));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = Config::from_lookup(lookup(&[(ENV_DB_PATH, ""), (ENV_HOST, "  "), (ENV_PORT, "")])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_in_memory_wins_over_path() {
        let config = Config::from_lookup(lookup(&[(ENV_DB_PATH, "/tmp/todo.db"), (ENV_IN_MEMORY, "true")])).unwrap();
        assert_eq!(config.database().unwrap(), DatabaseLocation::InMemory);
    }
}
