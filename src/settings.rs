//! Board settings
//!
//! Persisted as JSON. Only the board scale is configurable; the ring
//! geometry itself is fixed (see [`crate::consts`]).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_BOARD_SCALE;
use crate::error::{Error, Result};
use crate::rules::topology::check_scale;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Side length of the square working space the board is laid out in
    pub board_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board_scale: DEFAULT_BOARD_SCALE,
        }
    }
}

impl Settings {
    pub fn with_scale(board_scale: f32) -> Self {
        Self { board_scale }
    }

    pub fn validate(&self) -> Result<()> {
        check_scale(self.board_scale)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| Error::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings = serde_json::from_str(&json).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| Error::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{MAX_BOARD_SCALE, MIN_BOARD_SCALE};

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("five_rings_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_default_is_valid() {
        let settings = Settings::default();
        assert_eq!(settings.board_scale, 800.0);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_bounds() {
        assert!(Settings::with_scale(MIN_BOARD_SCALE).validate().is_ok());
        assert!(Settings::with_scale(99.0).validate().is_err());
        assert!(Settings::with_scale(f32::NAN).validate().is_err());
        assert!(Settings::with_scale(f32::INFINITY).validate().is_err());
        assert!(Settings::with_scale(MAX_BOARD_SCALE).validate().is_ok());
        assert!(matches!(
            Settings::with_scale(5e9).validate(),
            Err(Error::InvalidScale { .. })
        ));
    }

    #[test]
    fn test_missing_field_uses_default() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, Settings::default());
        let settings: Settings = serde_json::from_str(r#"{"board_scale": 640.0}"#).unwrap();
        assert_eq!(settings.board_scale, 640.0);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("roundtrip");
        Settings::with_scale(1024.0).save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap().board_scale, 1024.0);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_errors() {
        let missing = temp_path("missing");
        assert!(matches!(Settings::load(&missing), Err(Error::SettingsIo { .. })));
        assert_eq!(Settings::load_or_default(&missing), Settings::default());

        let garbage = temp_path("garbage");
        fs::write(&garbage, "not json").unwrap();
        assert!(matches!(Settings::load(&garbage), Err(Error::SettingsParse { .. })));
        let _ = fs::remove_file(&garbage);

        let small = temp_path("small");
        fs::write(&small, r#"{"board_scale": 5.0}"#).unwrap();
        assert!(matches!(Settings::load(&small), Err(Error::InvalidScale { .. })));
        let _ = fs::remove_file(&small);
    }
}
