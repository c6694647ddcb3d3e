//! Application settings
//!
//! Read once at startup from an optional JSON file in the working directory.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Settings file looked up by the binary
pub const SETTINGS_FILE: &str = "registry_settings.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the registry is loaded from and saved to
    pub data_file: PathBuf,

    // === Prompts ===
    /// Ask for confirmation before deleting a record
    pub confirm_delete: bool,
    /// Offer to save when leaving the menu
    pub prompt_save_on_exit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(crate::DATA_FILE),
            confirm_delete: true,
            prompt_save_on_exit: true,
        }
    }
}

impl Settings {
    /// Load settings from `path`, using defaults if it is missing or invalid
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Using default settings");
                Self::default()
            }
            Err(e) => {
                log::warn!("Cannot read settings {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.data_file, PathBuf::from("data.json"));
        assert!(settings.confirm_delete);
        assert!(settings.prompt_save_on_exit);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(Settings::load(dir.path().join("none.json")), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"data_file": "class-7b.json", "confirm_delete": false}"#)
            .expect("seed");

        let settings = Settings::load(&path);
        assert_eq!(settings.data_file, PathBuf::from("class-7b.json"));
        assert!(!settings.confirm_delete);
        assert!(settings.prompt_save_on_exit);
    }

    #[test]
    fn test_unreadable_path_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        assert_eq!(Settings::load(dir.path()), Settings::default());
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "{ nope").expect("seed");
        assert_eq!(Settings::load(&path), Settings::default());
    }
}
