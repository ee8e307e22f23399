//! Settings persistence as TOML in the platform config directory.
//!
//! Events are deliberately not persisted; the config file only carries
//! presentation preferences.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("could not resolve a config directory for this platform")]
    NoConfigDir,
}

pub struct SettingsService {
    config_dir: Option<PathBuf>,
}

impl SettingsService {
    /// Service rooted at the platform config directory.
    pub fn new() -> Self {
        Self { config_dir: None }
    }

    /// Service rooted at an explicit directory (used by tests).
    pub fn with_config_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: Some(dir.into()),
        }
    }

    fn settings_path(&self) -> Result<PathBuf> {
        let dir = match &self.config_dir {
            Some(dir) => dir.clone(),
            None => ProjectDirs::from("", "", "calgrid")
                .ok_or(SettingsError::NoConfigDir)?
                .config_dir()
                .to_path_buf(),
        };
        Ok(dir.join(SETTINGS_FILE))
    }

    /// Load settings; a missing file yields the defaults.
    pub fn load(&self) -> Result<Settings> {
        let path = self.settings_path()?;
        if !path.exists() {
            return Ok(Settings::default());
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read settings file {}", path.display()))?;
        let settings = toml::from_str(&raw)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure.
    pub fn load_or_default(&self) -> Settings {
        match self.load() {
            Ok(settings) => settings,
            Err(err) => {
                log::warn!("Using default settings: {:#}", err);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> Result<()> {
        let path = self.settings_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config directory {}", parent.display()))?;
        }

        let raw = toml::to_string_pretty(settings).context("failed to serialize settings")?;
        fs::write(&path, raw)
            .with_context(|| format!("failed to write settings file {}", path.display()))?;
        Ok(())
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = SettingsService::with_config_dir(dir.path());

        let settings = service.load().unwrap();
        assert_eq!(settings.theme, Settings::default().theme);
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let service = SettingsService::with_config_dir(dir.path());

        let mut settings = Settings::default();
        settings.theme = "light".to_string();
        settings.first_day_of_week = 1;
        service.save(&settings).unwrap();

        let loaded = service.load().unwrap();
        assert_eq!(loaded.theme, "light");
        assert_eq!(loaded.first_day_of_week, 1);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let service = SettingsService::with_config_dir(dir.path());
        fs::write(dir.path().join(SETTINGS_FILE), "not = [valid").unwrap();

        assert!(service.load().is_err());
        let settings = service.load_or_default();
        assert_eq!(settings.theme, Settings::default().theme);
    }
}
