//! Configuration loading from file and environment variables.

use lightbnb_db::ConnectionConfig;
use serde::Deserialize;
use thiserror::Error;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Database connection settings.
    #[serde(default)]
    pub database: ConnectionConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Fixture seeding settings.
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "lightbnb_queries=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

/// Fixture seeding configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedConfig {
    /// Directory holding `users.json` and `properties.json`. Seeding is
    /// skipped when unset.
    #[serde(default)]
    pub dir: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `LIGHTBNB_DB_HOST` overrides `database.host`
/// - `LIGHTBNB_DB_PORT` overrides `database.port`
/// - `LIGHTBNB_DB_USER` overrides `database.user`
/// - `LIGHTBNB_DB_PASSWORD` overrides `database.password`
/// - `LIGHTBNB_DB_NAME` overrides `database.database`
/// - `LIGHTBNB_LOG_LEVEL` overrides `logging.level`
/// - `LIGHTBNB_LOG_JSON` overrides `logging.json` (set to "true" to enable)
/// - `LIGHTBNB_SEED_DIR` overrides `seed.dir`
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok());
    Ok(config)
}

fn apply_env_overrides(config: &mut Config, var: impl Fn(&str) -> Option<String>) {
    if let Some(host) = var("LIGHTBNB_DB_HOST") {
        config.database.host = Some(host);
    }
    if let Some(port) = var("LIGHTBNB_DB_PORT") {
        if let Ok(parsed) = port.parse() {
            config.database.port = Some(parsed);
        }
    }
    if let Some(user) = var("LIGHTBNB_DB_USER") {
        config.database.user = Some(user);
    }
    if let Some(password) = var("LIGHTBNB_DB_PASSWORD") {
        config.database.password = Some(password);
    }
    if let Some(database) = var("LIGHTBNB_DB_NAME") {
        config.database.database = database;
    }
    if let Some(level) = var("LIGHTBNB_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = var("LIGHTBNB_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }
    if let Some(dir) = var("LIGHTBNB_SEED_DIR") {
        config.seed.dir = Some(dir);
    }
}
