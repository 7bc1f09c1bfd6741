use anyhow::Result;
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Process configuration from environment variables with local defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub settings_path: PathBuf,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let db_path = env::var("TRIPWIZARD_DB_PATH")
            .unwrap_or_else(|_| "tripwizard.db".to_string())
            .into();
        let settings_path = env::var("TRIPWIZARD_SETTINGS_PATH")
            .unwrap_or_else(|_| "tripwizard-settings.json".to_string())
            .into();
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            db_path,
            settings_path,
            log_level,
        })
    }
}
