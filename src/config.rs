// src/config.rs
use std::{env, path::PathBuf, str::FromStr};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    listen_addr: String,
    basic_username: String,
    basic_password: String,
    max_connections: u32,
    id_parsing: IdParsing,
    static_dir: PathBuf,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// How malformed article ids and cursors in paths and query strings are treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdParsing {
    /// Reject with 400 Bad Request.
    #[default]
    Strict,
    /// Substitute `0`, matching the behaviour of older deployments.
    Lenient,
}

impl FromStr for IdParsing {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" | "legacy" => Ok(Self::Lenient),
            other => Err(ConfigError::Invalid(format!(
                "ID_PARSING must be `strict` or `lenient`, got `{other}`"
            ))),
        }
    }
}

fn default_database_url() -> String {
    "sqlite://blog.db?mode=rwc".into()
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_max_connections() -> u32 {
    16
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn required(key: &'static str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(key))
}

impl AppConfig {
    /// Build configuration from environment variables. Only the shared basic
    /// auth credential is required; everything else has a default.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let basic_username = required("BASIC_USERNAME")?;
        let basic_password = required("BASIC_PASSWORD")?;

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ConfigError::Invalid(format!(
                        "DATABASE_MAX_CONNECTIONS must be a positive integer, got `{raw}`"
                    ))
                })?,
            Err(_) => default_max_connections(),
        };

        let id_parsing = env::var("ID_PARSING")
            .ok()
            .map(|v| v.parse::<IdParsing>())
            .transpose()?
            .unwrap_or_default();

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_static_dir());

        Ok(Self {
            database_url,
            listen_addr,
            basic_username,
            basic_password,
            max_connections,
            id_parsing,
            static_dir,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn basic_username(&self) -> &str {
        &self.basic_username
    }

    pub fn basic_password(&self) -> &str {
        &self.basic_password
    }

    pub fn max_connections(&self) -> u32 {
        self.max_connections
    }

    pub fn id_parsing(&self) -> IdParsing {
        self.id_parsing
    }

    pub fn static_dir(&self) -> &std::path::Path {
        &self.static_dir
    }
}
