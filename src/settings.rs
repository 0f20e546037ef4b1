//! Runtime preferences
//!
//! Only platform concerns live here. Gameplay tuning is compile-time
//! (see [`crate::consts`]) and never read from disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DasherError;

/// Platform preferences, read once at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory holding the sprite sheets and layer textures
    pub asset_dir: PathBuf,
    /// Integer multiplier applied to the logical window size
    pub window_scale: u32,
    /// Present with vsync (otherwise the frame clock alone paces frames)
    pub vsync: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("textures"),
            window_scale: 1,
            vsync: true,
        }
    }
}

impl Settings {
    /// Settings file looked up in the working directory
    pub const FILE_NAME: &'static str = "dapper_dasher.json";

    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str, path: &Path) -> Result<Self, DasherError> {
        serde_json::from_str(json).map_err(|source| DasherError::Settings {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read settings from `path`
    pub fn load_from(path: &Path) -> Result<Self, DasherError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json, path)
    }

    /// Load settings from [`Self::FILE_NAME`], falling back to defaults
    pub fn load() -> Self {
        let path = Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("Using default settings");
            return Self::default();
        }

        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} - using default settings", e);
                Self::default()
            }
        }
    }

    /// Scale clamped to something a window can use
    pub fn effective_scale(&self) -> u32 {
        self.window_scale.clamp(1, 4)
    }

    /// Full path of a texture inside the asset directory
    pub fn asset_path(&self, file_name: &str) -> PathBuf {
        self.asset_dir.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings =
            Settings::from_json(r#"{ "window_scale": 2 }"#, Path::new("test.json")).unwrap();
        assert_eq!(settings.window_scale, 2);
        assert_eq!(settings.asset_dir, PathBuf::from("textures"));
        assert!(settings.vsync);
    }

    #[test]
    fn test_malformed_json_reports_path() {
        let err = Settings::from_json("{ nope", Path::new("broken.json")).unwrap_err();
        assert!(matches!(err, DasherError::Settings { .. }));
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_effective_scale_clamped() {
        let mut settings = Settings::default();
        settings.window_scale = 0;
        assert_eq!(settings.effective_scale(), 1);
        settings.window_scale = 9;
        assert_eq!(settings.effective_scale(), 4);
    }

    #[test]
    fn test_asset_path() {
        let settings = Settings {
            asset_dir: PathBuf::from("assets"),
            ..Default::default()
        };
        assert_eq!(
            settings.asset_path("scarfy.png"),
            Path::new("assets").join("scarfy.png")
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, DasherError::Io(_)));
    }
}
