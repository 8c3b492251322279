/// User settings
///
/// Presentation preferences read from a JSON file in the user's config
/// directory. Nothing here is written back; screen state is never saved.
///
/// The settings file is looked up at:
/// - Linux: ~/.config/tip-gallery/settings.json
/// - macOS: ~/Library/Application Support/tip-gallery/settings.json
/// - Windows: %APPDATA%\tip-gallery\settings.json

use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Screens the application can show
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    TipCalculator,
    #[default]
    Gallery,
}

/// Light or dark widget theme
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Screen shown at launch
    pub start_screen: Screen,
    pub theme: ThemeChoice,
    /// Directory holding the gallery's PNG files (None = bundled assets)
    pub asset_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from the default location
    ///
    /// A missing file (or no config directory at all) yields the defaults.
    pub fn load() -> Result<Self, SettingsError> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config directory, using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Load settings from a specific file, falling back to defaults if it
    /// does not exist
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let settings = Self::from_json(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Parse from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Gallery image directory, falling back to the bundled assets
    pub fn asset_dir(&self) -> PathBuf {
        self.asset_dir
            .clone()
            .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join("gallery"))
    }

    fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("tip-gallery");
        path.push("settings.json");
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.start_screen, Screen::Gallery);
        assert_eq!(settings.theme, ThemeChoice::Light);
        assert!(settings.asset_dir().ends_with("assets/gallery"));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "theme": "dark" }"#).unwrap();
        assert_eq!(settings.theme, ThemeChoice::Dark);
        assert_eq!(settings.start_screen, Screen::Gallery);
        assert_eq!(settings.asset_dir, None);
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "start_screen": "tip_calculator",
            "theme": "light",
            "asset_dir": "/srv/art"
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.start_screen, Screen::TipCalculator);
        assert_eq!(settings.asset_dir(), PathBuf::from("/srv/art"));

        let restored = Settings::from_json(&serde_json::to_string(&settings).unwrap()).unwrap();
        assert_eq!(restored, settings);
    }

    #[test]
    fn test_unknown_screen_is_rejected() {
        assert!(Settings::from_json(r#"{ "start_screen": "settings" }"#).is_err());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{ "start_screen": "tip_calculator" }"#).unwrap();

        let settings = Settings::load_from(&path).unwrap();
        assert_eq!(settings.start_screen, Screen::TipCalculator);
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Settings::load_from(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
        assert!(err.to_string().contains("settings.json"));
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load_from(dir.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
