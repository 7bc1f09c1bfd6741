pub mod config;
pub mod db;
pub mod discover;
pub mod models;
pub mod reminders;
pub mod settings;

pub use config::AppConfig;
pub use db::Database;
pub use settings::SettingsStore;
