use crate::core::pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::core::{AppError, Result};
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
    /// Entries per page for basket, favourites and catalogue listings
    pub page_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub rate_limit_per_minute: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: match env::var("LOG_FORMAT").as_deref() {
                    Ok("json") => LogFormat::Json,
                    _ => LogFormat::Pretty,
                },
                page_size: parse_var("PAGE_SIZE", DEFAULT_PAGE_SIZE)?,
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            security: SecurityConfig {
                rate_limit_per_minute: parse_var("RATE_LIMIT_PER_MINUTE", 1000)?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.app.page_size == 0 || self.app.page_size > MAX_PAGE_SIZE {
            return Err(AppError::Configuration(format!(
                "Page size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        if self.security.rate_limit_per_minute == 0 {
            return Err(AppError::Configuration(
                "Rate limit must be greater than 0".to_string(),
            ));
        }

        if self.database.pool_size > self.database.max_connections {
            return Err(AppError::Configuration(
                "DATABASE_POOL_SIZE cannot exceed DATABASE_MAX_CONNECTIONS".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "SERVER_WORKERS must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Read an optional variable, falling back to `default` when unset
pub(crate) fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", name))),
        Err(_) => Ok(default),
    }
}
