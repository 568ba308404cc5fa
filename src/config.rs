use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::Path;
use validator::Validate;

const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_ENV: &str = "development";
const DEFAULT_PORT: u16 = 4060;
const CONFIG_DIR: &str = "config";

/// Application configuration, loaded once at startup and treated as
/// immutable afterwards. The CORS allow-list lives here rather than in
/// ambient module state.
#[derive(Clone, Debug, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Database connection URL
    pub database_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Application environment ("development", "test", "production")
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Logging level filter
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log in JSON format (structured logging)
    #[serde(default)]
    pub log_json: bool,

    /// Whether to run database migrations on startup
    #[serde(default)]
    pub auto_migrate: bool,

    /// Comma-separated list of allowed CORS origins, matched exactly
    #[serde(default)]
    pub cors_allowed_origins: Option<String>,

    /// Base URL composite reads use to call sibling modules of this
    /// deployment. Defaults to the server's own host/port.
    #[serde(default)]
    pub internal_base_url: Option<String>,

    /// DB pool: max connections
    #[serde(default = "default_db_max_connections")]
    pub db_max_connections: u32,

    /// DB pool: min connections
    #[serde(default = "default_db_min_connections")]
    pub db_min_connections: u32,

    /// DB connect timeout (seconds)
    #[serde(default = "default_db_connect_timeout_secs")]
    pub db_connect_timeout_secs: u64,

    /// DB acquire timeout (seconds)
    #[serde(default = "default_db_acquire_timeout_secs")]
    pub db_acquire_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_environment() -> String {
    DEFAULT_ENV.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_db_max_connections() -> u32 {
    10
}

fn default_db_min_connections() -> u32 {
    1
}

fn default_db_connect_timeout_secs() -> u64 {
    30
}

fn default_db_acquire_timeout_secs() -> u64 {
    8
}

impl AppConfig {
    pub fn is_development(&self) -> bool {
        self.environment.eq_ignore_ascii_case("development")
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    /// Allow-list of CORS origins. Empty when none are configured.
    pub fn allowed_origins(&self) -> Vec<String> {
        self.cors_allowed_origins
            .as_deref()
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Base URL for internal cross-module HTTP calls.
    pub fn internal_base_url(&self) -> String {
        self.internal_base_url
            .clone()
            .unwrap_or_else(|| format!("http://127.0.0.1:{}", self.port))
    }
}

/// Load configuration from `config/default.toml`, an optional
/// environment-specific file, and `APP__*` environment variables, in
/// increasing order of precedence.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let run_env = env::var("APP_ENV").unwrap_or_else(|_| DEFAULT_ENV.to_string());

    let mut builder = Config::builder()
        .add_source(File::from(Path::new(CONFIG_DIR).join("default.toml")).required(false))
        .add_source(File::from(Path::new(CONFIG_DIR).join(format!("{run_env}.toml"))).required(false))
        .add_source(Environment::with_prefix("APP").separator("__"));

    builder = builder.set_default("environment", run_env.clone())?;

    let cfg: AppConfig = builder.build()?.try_deserialize()?;

    cfg.validate()
        .map_err(|e| ConfigError::Message(format!("invalid configuration: {e}")))?;

    Ok(cfg)
}

/// Initialise the global tracing subscriber.
pub fn init_tracing(level: &str, json: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    if json {
        let _ = fmt().with_env_filter(filter).json().try_init();
    } else {
        let _ = fmt().with_env_filter(filter).try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".to_string(),
            host: default_host(),
            port: 4060,
            environment: "test".to_string(),
            log_level: default_log_level(),
            log_json: false,
            auto_migrate: true,
            cors_allowed_origins: None,
            internal_base_url: None,
            db_max_connections: 2,
            db_min_connections: 1,
            db_connect_timeout_secs: 5,
            db_acquire_timeout_secs: 5,
        }
    }

    #[test]
    fn allowed_origins_splits_and_trims() {
        let mut cfg = base_config();
        cfg.cors_allowed_origins =
            Some("http://localhost:3005, https://portal.example.com ,".to_string());
        assert_eq!(
            cfg.allowed_origins(),
            vec![
                "http://localhost:3005".to_string(),
                "https://portal.example.com".to_string()
            ]
        );
    }

    #[test]
    fn allowed_origins_empty_when_unset() {
        let cfg = base_config();
        assert!(cfg.allowed_origins().is_empty());
    }

    #[test]
    fn internal_base_url_defaults_to_own_port() {
        let cfg = base_config();
        assert_eq!(cfg.internal_base_url(), "http://127.0.0.1:4060");
    }
}
