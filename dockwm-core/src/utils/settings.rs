//! Durable per-user settings. A small JSON file under the user's config
//! directory; every key maps 1:1 onto a field so the file stays a plain
//! native-boolean encoding.

use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub debug_window_is_attached: bool,
    #[serde(default)]
    pub debug_window_show_details: bool,
    #[serde(default)]
    pub debug_window_auto_scroll: bool,
}

/// Write-through store for [`Settings`]. A store without a path keeps the
/// values in memory only (tests, or when the config dir is unavailable).
#[derive(Debug, Default)]
pub struct SettingsStore {
    path: Option<PathBuf>,
    pub values: Settings,
}

impl SettingsStore {
    /// Load settings from the user's config directory. Falls back to an
    /// in-memory store when the directory cannot be resolved; settings then
    /// simply do not survive a restart.
    #[must_use]
    pub fn load() -> Self {
        match place_settings_file() {
            Ok(path) => Self::from_path(path),
            Err(err) => {
                tracing::warn!("could not resolve settings path, settings will not persist: {err}");
                Self::in_memory()
            }
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_path(path: PathBuf) -> Self {
        let values = read_settings(&path).unwrap_or_else(|err| {
            tracing::warn!("could not read settings from {}: {err}", path.display());
            Settings::default()
        });
        Self {
            path: Some(path),
            values,
        }
    }

    /// Persist the current values. Failure degrades to a warning; a write
    /// error must never block a state transition.
    pub fn save(&self) {
        let Some(path) = &self.path else { return };
        if let Err(err) = write_settings(path, &self.values) {
            tracing::warn!("could not write settings to {}: {err}", path.display());
        }
    }
}

fn place_settings_file() -> Result<PathBuf> {
    let path = xdg::BaseDirectories::with_prefix("dockwm")?.place_config_file("settings.json")?;
    Ok(path)
}

fn read_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_settings(path: &Path, settings: &Settings) -> Result<()> {
    let contents = serde_json::to_string_pretty(settings)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_and_reload_round_trips_all_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("settings.json");

        let mut store = SettingsStore::from_path(path.clone());
        store.values.debug_window_is_attached = true;
        store.values.debug_window_auto_scroll = true;
        store.save();

        let reloaded = SettingsStore::from_path(path);
        assert!(reloaded.values.debug_window_is_attached);
        assert!(reloaded.values.debug_window_auto_scroll);
        assert!(!reloaded.values.debug_window_show_details);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = SettingsStore::from_path(dir.path().join("absent.json"));
        assert_eq!(store.values, Settings::default());
    }

    #[test]
    fn in_memory_store_never_touches_disk() {
        let mut store = SettingsStore::in_memory();
        store.values.debug_window_is_attached = true;
        store.save();
        assert!(store.values.debug_window_is_attached);
    }
}
