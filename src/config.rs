// src/config.rs
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: String,
    upload_dir: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://verandah.db?mode=rwc".into()
}

fn default_upload_dir() -> String {
    "./uploads".into()
}

impl AppConfig {
    /// Build configuration from environment variables. Uses sensible defaults
    /// for optional values and validates what is provided.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| default_database_url());
        let upload_dir = env::var("UPLOAD_DIR").unwrap_or_else(|_| default_upload_dir());

        if upload_dir.trim().is_empty() {
            return Err(ConfigError::Invalid("UPLOAD_DIR must not be empty".into()));
        }

        Ok(Self {
            database_url,
            upload_dir,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Directory uploaded photo files are written into.
    pub fn upload_dir(&self) -> &str {
        &self.upload_dir
    }
}
