use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Number of rows returned by the ranking reports unless overridden
pub const DEFAULT_TOP_LIMIT: u32 = 5;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub reports: ReportsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Result-count policy for the ranking reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ReportsConfig {
    pub top_customers_limit: u32,
    pub top_products_limit: u32,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            top_customers_limit: DEFAULT_TOP_LIMIT,
            top_products_limit: DEFAULT_TOP_LIMIT,
        }
    }
}

impl ReportsConfig {
    pub fn from_env() -> Result<Self> {
        Ok(ReportsConfig {
            top_customers_limit: parse_limit("REPORT_TOP_CUSTOMERS_LIMIT")?,
            top_products_limit: parse_limit("REPORT_TOP_PRODUCTS_LIMIT")?,
        })
    }
}

fn parse_limit(key: &str) -> Result<u32> {
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Configuration(format!("Invalid {}", key))),
        Err(_) => Ok(DEFAULT_TOP_LIMIT),
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let log_format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("pretty") | Err(_) => LogFormat::Pretty,
            Ok(other) => {
                return Err(AppError::Configuration(format!(
                    "Invalid LOG_FORMAT '{}', expected 'pretty' or 'json'",
                    other
                )))
            }
        };

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format,
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            reports: ReportsConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "Database max connections must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        if self.reports.top_customers_limit == 0 || self.reports.top_products_limit == 0 {
            return Err(AppError::Configuration(
                "Report limits must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
