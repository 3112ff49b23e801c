pub mod database_config;
pub mod defaults;
pub mod search_config;
pub mod security_config;

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;
use thiserror::Error;

pub use database_config::DatabaseConfig;
pub use search_config::SearchConfig;
pub use security_config::SecurityConfig;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid search configuration: {0}")]
    Search(String),

    #[error("Invalid security configuration: {0}")]
    Security(String),

    #[error("Invalid database configuration: {0}")]
    Database(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "defaults::default_host")]
    pub host: String,
    #[serde(default = "defaults::default_port")]
    pub port: u16,
    #[serde(default = "defaults::default_environment")]
    pub environment: String,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub security: SecurityConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "defaults::default_logging_level")]
    pub level: String,
    #[serde(default = "defaults::default_logging_json_format")]
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_logging_level(),
            json_format: defaults::default_logging_json_format(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Box<figment::Error>> {
        Self::figment().extract().map_err(Box::new)
    }

    /// Layered sources, later ones win: `config/default.toml`,
    /// `config/development.toml`, `APP_` variables (`__` nests), then the
    /// bare `DATABASE_URL` and `LOG_LEVEL` variables.
    pub fn figment() -> Figment {
        Figment::new()
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file("config/development.toml"))
            .merge(Env::prefixed("APP_").split("__"))
            .merge(
                Env::raw()
                    .only(&["DATABASE_URL", "LOG_LEVEL"])
                    .map(|key| match key.as_str() {
                        "DATABASE_URL" => "database.url".into(),
                        "LOG_LEVEL" => "logging.level".into(),
                        _ => key.into(),
                    }),
            )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Database(
                "DATABASE_URL must be set".to_string(),
            ));
        }
        if self.database.min_connections > self.database.max_connections {
            return Err(ConfigError::Database(format!(
                "min_connections ({}) must not exceed max_connections ({})",
                self.database.min_connections, self.database.max_connections
            )));
        }

        self.security.validate()?;
        self.search.validate()
    }
}
