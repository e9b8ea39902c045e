use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LifelogConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub query: QueryConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub transport: String,
    pub host: String,
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
    pub default_category: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct QueryConfig {
    pub default_limit: usize,
    pub recent_limit: usize,
    pub reminder_lookahead_days: i64,
}

impl Default for LifelogConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            query: QueryConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            transport: "stdio".into(),
            host: "127.0.0.1".into(),
            port: 8727,
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_lifelog_dir()
            .join("timeline.db")
            .to_string_lossy()
            .into_owned();
        Self {
            db_path,
            default_category: crate::timeline::types::DEFAULT_CATEGORY.into(),
        }
    }
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            default_limit: crate::timeline::types::DEFAULT_QUERY_LIMIT,
            recent_limit: 10,
            reminder_lookahead_days: 30,
        }
    }
}

/// Returns `~/.lifelog/`
pub fn default_lifelog_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".lifelog")
}

/// Returns the default config file path: `~/.lifelog/config.toml`
pub fn default_config_path() -> PathBuf {
    default_lifelog_dir().join("config.toml")
}

impl LifelogConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            LifelogConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (LIFELOG_DB, LIFELOG_CATEGORY,
    /// LIFELOG_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("LIFELOG_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("LIFELOG_CATEGORY") {
            self.storage.default_category = val;
        }
        if let Ok(val) = std::env::var("LIFELOG_LOG_LEVEL") {
            self.server.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
