//! User settings persisted as a JSON file next to the database.
//!
//! Mirrors the preference surface of the app: username, dark-mode
//! preference, and the last known location as a space-separated
//! `"lat lon"` string. A malformed location value is treated as "no
//! location available", never as a fatal error.

use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::models::Coordinates;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct UserSettings {
    username: String,
    dark_mode_preferred: Option<bool>,
    latest_user_location: Option<String>,
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<UserSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            UserSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn username(&self) -> String {
        self.data.read().unwrap().username.clone()
    }

    pub fn save_username(&self, username: String) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        guard.username = username;
        self.persist(&guard)
    }

    pub fn dark_mode_preferred(&self) -> Option<bool> {
        self.data.read().unwrap().dark_mode_preferred
    }

    pub fn save_dark_mode_preferred(&self, preferred: bool) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        guard.dark_mode_preferred = Some(preferred);
        self.persist(&guard)
    }

    /// Last known location, if one was stored and parses cleanly.
    pub fn latest_user_location(&self) -> Option<Coordinates> {
        let guard = self.data.read().unwrap();
        let raw = guard.latest_user_location.as_deref()?;
        match Coordinates::from_settings_string(raw) {
            Ok(coordinates) => Some(coordinates),
            Err(err) => {
                warn!("Ignoring malformed stored location '{raw}': {err}");
                None
            }
        }
    }

    pub fn save_latest_user_location(&self, coordinates: Coordinates) -> Result<()> {
        let mut guard = self.data.write().unwrap();
        guard.latest_user_location = Some(coordinates.to_settings_string());
        self.persist(&guard)
    }

    fn persist(&self, data: &UserSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_when_file_is_missing() {
        let dir = tempdir().unwrap();
        let store = SettingsStore::new(dir.path().join("settings.json")).unwrap();
        assert_eq!(store.username(), "");
        assert_eq!(store.dark_mode_preferred(), None);
        assert!(store.latest_user_location().is_none());
    }

    #[test]
    fn values_survive_a_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::new(path.clone()).unwrap();
        store.save_username("ada".into()).unwrap();
        store.save_dark_mode_preferred(true).unwrap();
        store
            .save_latest_user_location(Coordinates::new(48.8566, 2.3522))
            .unwrap();

        let reloaded = SettingsStore::new(path).unwrap();
        assert_eq!(reloaded.username(), "ada");
        assert_eq!(reloaded.dark_mode_preferred(), Some(true));
        assert_eq!(
            reloaded.latest_user_location(),
            Some(Coordinates::new(48.8566, 2.3522))
        );
    }

    #[test]
    fn malformed_location_reads_as_no_location() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(
            &path,
            r#"{"username":"","darkModePreferred":null,"latestUserLocation":"not a location at all"}"#,
        )
        .unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert!(store.latest_user_location().is_none());
    }

    #[test]
    fn corrupt_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ this is not json").unwrap();

        let store = SettingsStore::new(path).unwrap();
        assert_eq!(store.username(), "");
    }
}
