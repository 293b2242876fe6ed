//! Locally persisted display settings.
//!
//! The web client keeps the selected theme and color mode in browser
//! storage under the fixed keys `theme` and `colorMode`; here the same
//! two values live in a small JSON file, reapplied on startup. A missing
//! or unreadable file silently falls back to defaults -- settings are
//! cosmetic and must never block startup.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use folio_core::{ColorMode, Theme};

/// Persisted display settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub theme: Theme,
    #[serde(rename = "colorMode", default)]
    pub color_mode: ColorMode,
}

impl Settings {
    /// Load settings from `path`, falling back to defaults when the file
    /// is missing, unreadable, or fails to parse (logged, not fatal).
    pub fn load(path: &Path) -> Settings {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Settings::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Could not read settings");
                return Settings::default();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Stored settings are invalid; using defaults",
                );
                Settings::default()
            }
        }
    }

    /// Write settings to `path`, creating parent directories as needed.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = serde_json::to_vec_pretty(self)?;
        fs::write(path, bytes)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("nope.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn garbage_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, b"{not json").unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn unknown_theme_name_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, br#"{"theme":"neon","colorMode":"dark"}"#).unwrap();
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/dir/settings.json");

        let settings = Settings {
            theme: Theme::PastelGreen,
            color_mode: ColorMode::Dark,
        };
        settings.save(&path).unwrap();
        assert_eq!(Settings::load(&path), settings);
    }

    #[test]
    fn file_uses_the_fixed_storage_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        Settings {
            theme: Theme::BrightOrange,
            color_mode: ColorMode::Dark,
        }
        .save(&path)
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(value["theme"], "bright-orange");
        assert_eq!(value["colorMode"], "dark");
    }
}
