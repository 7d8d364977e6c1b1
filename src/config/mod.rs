use std::env;

use crate::core::{AppError, Result};

pub mod recommender;
pub mod server;
pub mod storage;

pub use recommender::RecommenderConfig;
pub use server::ServerConfig;
pub use storage::StorageConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub recommender: RecommenderConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Ok(Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            server: ServerConfig::from_env()?,
            storage: StorageConfig::from_env(),
            recommender: RecommenderConfig::from_env(),
        })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "Server port must be greater than 0".to_string(),
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        if self.storage.orders_path.as_os_str().is_empty() {
            return Err(AppError::Configuration(
                "Orders store path must not be empty".to_string(),
            ));
        }

        if self.recommender.base_url.is_empty() {
            return Err(AppError::Configuration(
                "Recommender base URL must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
