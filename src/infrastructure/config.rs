//! Application configuration management.
//!
//! Configuration is read once at startup from environment variables (a `.env`
//! file is honoured when present). Missing or malformed values produce a
//! [`ConfigError`] naming the offending variable.
//!
//! # Environment Variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `STORAGE_MODE` | `postgres` | `postgres` or `in_memory` |
//! | `POSTGRES_URL` | (required for `postgres`) | connection string; `DATABASE_URL` is used as a fallback |
//! | `HOST` | `0.0.0.0` | bind address |
//! | `PORT` | `4000` | bind port |
//! | `STRICT_SCHEMA` | `false` | abort startup when the schema check fails |
//! | `LOG_FORMAT` | `text` | `text` or `json` |

use std::env;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 4000;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    /// An environment variable has an invalid value.
    #[error("Invalid value for {key}: {message}")]
    InvalidValue {
        /// The name of the environment variable.
        key: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// Where delivery records are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageMode {
    #[default]
    Postgres,
    InMemory,
}

impl FromStr for StorageMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "in_memory" | "in-memory" | "memory" => Ok(Self::InMemory),
            other => Err(format!("unknown storage mode '{other}'")),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}'")),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub storage_mode: StorageMode,
    /// Postgres connection string. Always `Some` in [`StorageMode::Postgres`].
    pub database_url: Option<String>,
    pub app_host: String,
    pub app_port: u16,
    /// Whether a failed schema check aborts startup.
    pub strict_schema: bool,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Loads configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] if Postgres storage is selected
    /// without a connection string, and [`ConfigError::InvalidValue`] for any
    /// value that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`AppConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode: Option<StorageMode> = parse_optional(&lookup, "STORAGE_MODE")?;
        let storage_mode = mode.unwrap_or_default();

        let database_url = lookup("POSTGRES_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .filter(|url| !url.trim().is_empty());
        if storage_mode == StorageMode::Postgres && database_url.is_none() {
            return Err(ConfigError::MissingEnvVar("POSTGRES_URL".to_string()));
        }

        let app_host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let app_port = parse_optional(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT);
        let strict_schema = parse_optional(&lookup, "STRICT_SCHEMA")?.unwrap_or(false);
        let log_format = parse_optional(&lookup, "LOG_FORMAT")?.unwrap_or_default();

        Ok(Self {
            storage_mode,
            database_url,
            app_host,
            app_port,
            strict_schema,
            log_format,
        })
    }
}

impl Default for AppConfig {
    /// In-memory storage on `0.0.0.0:4000`.
    fn default() -> Self {
        Self {
            storage_mode: StorageMode::InMemory,
            database_url: None,
            app_host: DEFAULT_HOST.to_string(),
            app_port: DEFAULT_PORT,
            strict_schema: false,
            log_format: LogFormat::Text,
        }
    }
}

/// Reads and parses an optional variable; unset or blank means `None`.
fn parse_optional<F, T>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: ToString,
{
    let Some(value) = lookup(key).filter(|value| !value.trim().is_empty()) else {
        return Ok(None);
    };

    value
        .trim()
        .parse()
        .map(Some)
        .map_err(|error: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: error.to_string(),
        })
}
