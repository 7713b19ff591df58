//! Connection configuration.

use serde::Deserialize;

/// Options recognized for opening the database.
///
/// `database` names the SQLite file (`:memory:` for a private in-memory
/// database). `host`, `port`, `user` and `password` are accepted so that
/// deployments can share one configuration shape with networked engines;
/// the embedded engine does not use them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConnectionConfig {
    #[serde(default)]
    pub host: Option<String>,

    #[serde(default)]
    pub port: Option<u16>,

    #[serde(default)]
    pub user: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// Path to the SQLite database file.
    #[serde(default = "default_database")]
    pub database: String,

    /// Busy timeout for SQLite connections, in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,

    /// Maximum number of pooled connections.
    #[serde(default = "default_pool_max_size")]
    pub pool_max_size: u32,

    /// How long a caller waits for a free pooled connection, in milliseconds.
    #[serde(default = "default_connection_timeout_ms")]
    pub connection_timeout_ms: u64,
}

fn default_database() -> String {
    "lightbnb.db".to_string()
}

fn default_busy_timeout_ms() -> u64 {
    5_000
}

fn default_pool_max_size() -> u32 {
    8
}

fn default_connection_timeout_ms() -> u64 {
    30_000
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            user: None,
            password: None,
            database: default_database(),
            busy_timeout_ms: default_busy_timeout_ms(),
            pool_max_size: default_pool_max_size(),
            connection_timeout_ms: default_connection_timeout_ms(),
        }
    }
}

impl ConnectionConfig {
    /// Config for a database file at `path` with default runtime settings.
    pub fn for_path(path: impl Into<String>) -> Self {
        Self {
            database: path.into(),
            ..Self::default()
        }
    }

    /// Names of the network options that are set but unused by SQLite.
    pub fn unused_network_options(&self) -> Vec<&'static str> {
        let mut unused = Vec::new();
        if self.host.is_some() {
            unused.push("host");
        }
        if self.port.is_some() {
            unused.push("port");
        }
        if self.user.is_some() {
            unused.push("user");
        }
        if self.password.is_some() {
            unused.push("password");
        }
        unused
    }
}
