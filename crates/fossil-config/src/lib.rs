//! Configuration management for Fossil
//!
//! Provides hierarchical configuration loading from multiple sources:
//! 1. Environment variables (FOSSIL_* prefix, highest precedence)
//! 2. fossil.local.toml (gitignored, local overrides)
//! 3. fossil.toml (git-tracked, project config)
//! 4. ~/.config/fossil/config.toml (user defaults)
//! 5. Built-in defaults (lowest precedence)
//!
//! Nested keys are separated by a double underscore in environment
//! variables: `FOSSIL_RECEIPT__MUSEUM_NAME="Natural History Annex"`.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod error;
mod loader;

pub use error::ConfigError;
pub use loader::{ConfigLoader, LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE, user_config_file};

/// Main Fossil configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FossilConfig {
    pub project: ProjectConfig,
    pub fixtures: FixtureConfig,
    pub receipt: ReceiptConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: "fossil-museum".to_string(),
        }
    }
}

/// Locations of the externally supplied JSON collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    pub dinosaurs: PathBuf,
    pub rooms: PathBuf,
    pub tickets: PathBuf,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            dinosaurs: PathBuf::from("data/dinosaurs.json"),
            rooms: PathBuf::from("data/rooms.json"),
            tickets: PathBuf::from("data/tickets.json"),
        }
    }
}

impl FixtureConfig {
    /// Points every fixture at `<dir>/{dinosaurs,rooms,tickets}.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            dinosaurs: dir.join("dinosaurs.json"),
            rooms: dir.join("rooms.json"),
            tickets: dir.join("tickets.json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptConfig {
    pub museum_name: String,
    pub separator: String,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            museum_name: "Dinosaur Museum".to_string(),
            separator: "-".repeat(43),
        }
    }
}

impl FossilConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        ConfigLoader::new().load()
    }

    /// Load configuration from specific project directory
    pub fn load_from_dir(project_dir: impl AsRef<Path>) -> Result<Self> {
        ConfigLoader::new().with_project_dir(project_dir).load()
    }

    /// Resolve relative fixture paths to absolute
    pub fn resolve_paths(&mut self, base_dir: impl AsRef<Path>) {
        let base = base_dir.as_ref();

        for path in [
            &mut self.fixtures.dinosaurs,
            &mut self.fixtures.rooms,
            &mut self.fixtures.tickets,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    /// Reject values no receipt or fixture lookup could work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.receipt.museum_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "receipt.museum_name must not be empty".to_string(),
            ));
        }
        if self.receipt.separator.is_empty() {
            return Err(ConfigError::ValidationError(
                "receipt.separator must not be empty".to_string(),
            ));
        }

        let fixtures = [
            ("fixtures.dinosaurs", &self.fixtures.dinosaurs),
            ("fixtures.rooms", &self.fixtures.rooms),
            ("fixtures.tickets", &self.fixtures.tickets),
        ];
        for (key, path) in fixtures {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "{key} must not be empty"
                )));
            }
        }

        Ok(())
    }

    /// Render this configuration as a `fossil.toml` document
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FossilConfig::default();
        assert_eq!(config.project.name, "fossil-museum");
        assert_eq!(config.fixtures.rooms, PathBuf::from("data/rooms.json"));
        assert_eq!(config.receipt.museum_name, "Dinosaur Museum");
        assert_eq!(config.receipt.separator.len(), 43);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_path_resolution() {
        let mut config = FossilConfig::default();
        config.fixtures.tickets = PathBuf::from("/srv/museum/tickets.json");
        config.resolve_paths("/home/user/museum");

        assert_eq!(
            config.fixtures.dinosaurs,
            PathBuf::from("/home/user/museum/data/dinosaurs.json")
        );
        assert_eq!(
            config.fixtures.rooms,
            PathBuf::from("/home/user/museum/data/rooms.json")
        );
        // Absolute paths are left alone
        assert_eq!(
            config.fixtures.tickets,
            PathBuf::from("/srv/museum/tickets.json")
        );
    }

    #[test]
    fn test_fixtures_in_dir() {
        let fixtures = FixtureConfig::in_dir("/data");
        assert_eq!(fixtures.dinosaurs, PathBuf::from("/data/dinosaurs.json"));
        assert_eq!(fixtures.rooms, PathBuf::from("/data/rooms.json"));
        assert_eq!(fixtures.tickets, PathBuf::from("/data/tickets.json"));
    }

    #[test]
    fn test_validation_rejects_empty_values() {
        let mut config = FossilConfig::default();
        config.receipt.museum_name = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));

        let mut config = FossilConfig::default();
        config.receipt.separator = String::new();
        assert!(config.validate().is_err());

        let mut config = FossilConfig::default();
        config.fixtures.rooms = PathBuf::new();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("fixtures.rooms"));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = FossilConfig::default();
        config.receipt.museum_name = "Natural History Annex".to_string();

        let rendered = config.to_toml().unwrap();
        assert!(rendered.contains("[receipt]"));

        let parsed: FossilConfig = toml::from_str(&rendered).unwrap();
        assert_eq!(parsed, config);
    }
}
