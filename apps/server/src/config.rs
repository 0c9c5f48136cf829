//! Configuration for the course search server
//!
//! Layered configuration: `config/default.toml` (optional), an optional
//! `config/{RUN_MODE}.toml` override file, then environment variables with
//! the `COURSEFINDER` prefix (`__` as the section separator, e.g.
//! `COURSEFINDER_SERVER__PORT=8080`). `DATABASE_URL` is honored as the
//! conventional override for `database.url`.

use serde::Deserialize;
use std::net::{SocketAddr, ToSocketAddrs};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind, e.g. "0.0.0.0" or "127.0.0.1".
    pub host: String,
    pub port: u16,
    /// Allowed CORS origins for the browser front end. Empty means no CORS
    /// headers are emitted.
    pub cors_origins: Vec<String>,
    /// Maximum accepted request body size in bytes (analytics POST bodies).
    pub max_request_body_size: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Postgres connection string. Usually supplied via `DATABASE_URL`.
    pub url: String,
    pub pool_min_size: u32,
    pub pool_max_size: u32,
    pub pool_timeout_seconds: u64,
    /// Apply bundled sqlx migrations at startup.
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing level when RUST_LOG is not set.
    pub level: String,
    /// Emit JSON log lines instead of the human-readable format.
    pub json: bool,
    pub file_enabled: bool,
    pub file_directory: String,
    pub file_prefix: String,
    /// One of "daily", "hourly", "minutely", "never".
    pub file_rotation: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Page size when the request does not specify `limit`.
    pub default_limit: i64,
    /// Upper clamp for the search `limit` parameter.
    pub max_limit: i64,
    pub suggest_default_limit: i64,
    /// Upper clamp for the suggestion `limit` parameter.
    pub suggest_max_limit: i64,
    /// Longest accepted free-text query, in characters.
    pub max_query_length: usize,
    /// Longest accepted suggestion query, in characters.
    pub max_suggest_query_length: usize,
    /// How long `/courses/filters` results may be served from memory.
    /// Zero disables the cache.
    pub filter_cache_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            logging: LoggingConfig::default(),
            search: SearchConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            cors_origins: Vec::new(),
            max_request_body_size: 1024 * 1024,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            pool_min_size: 1,
            pool_max_size: 10,
            pool_timeout_seconds: 30,
            run_migrations: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
            file_enabled: false,
            file_directory: "logs".to_string(),
            file_prefix: "coursefinder".to_string(),
            file_rotation: "daily".to_string(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: 20,
            max_limit: 100,
            suggest_default_limit: 10,
            suggest_max_limit: 20,
            max_query_length: 200,
            max_suggest_query_length: 100,
            filter_cache_seconds: 3600,
        }
    }
}

impl Config {
    /// Load configuration from files and the environment.
    pub fn load() -> anyhow::Result<Self> {
        // Pick up a local .env file when present (development convenience).
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let settings = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("COURSEFINDER")
                    .separator("__")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("server.cors_origins"),
            )
            .build()?;

        let mut config: Config = settings.try_deserialize()?;

        // DATABASE_URL beats any file-provided value, matching deployment
        // platform conventions.
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                config.database.url = url;
            }
        }

        Ok(config)
    }

    /// Sanity-check the configuration before the server starts.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.database.url.is_empty() {
            return Err(
                "database.url is not set (use DATABASE_URL or COURSEFINDER_DATABASE__URL)"
                    .to_string(),
            );
        }
        if self.database.pool_max_size == 0 {
            return Err("database.pool_max_size must be at least 1".to_string());
        }
        if self.database.pool_min_size > self.database.pool_max_size {
            return Err("database.pool_min_size cannot exceed database.pool_max_size".to_string());
        }
        if self.search.max_limit < 1 || self.search.suggest_max_limit < 1 {
            return Err("search limits must be at least 1".to_string());
        }
        if self.search.default_limit < 1 || self.search.default_limit > self.search.max_limit {
            return Err("search.default_limit must be within [1, search.max_limit]".to_string());
        }
        if self.search.suggest_default_limit < 1
            || self.search.suggest_default_limit > self.search.suggest_max_limit
        {
            return Err(
                "search.suggest_default_limit must be within [1, search.suggest_max_limit]"
                    .to_string(),
            );
        }
        match self.logging.file_rotation.as_str() {
            "daily" | "hourly" | "minutely" | "never" => {}
            other => {
                return Err(format!(
                    "logging.file_rotation must be one of daily/hourly/minutely/never, got '{other}'"
                ));
            }
        }
        Ok(())
    }

    /// Resolve the listen address from `server.host` and `server.port`.
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.to_socket_addrs()?
            .next()
            .ok_or_else(|| anyhow::anyhow!("'{addr}' did not resolve to a socket address"))
    }
}
