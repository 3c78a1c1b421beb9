//! Configuration loader with multi-source merging

use crate::FossilConfig;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::env;
use std::path::{Path, PathBuf};

/// Git-tracked project configuration, looked up in the project directory.
pub const PROJECT_CONFIG_FILE: &str = "fossil.toml";

/// Untracked local overrides, looked up in the project directory.
pub const LOCAL_CONFIG_FILE: &str = "fossil.local.toml";

/// Per-user defaults (`~/.config/fossil/config.toml` on Linux).
///
/// `None` when the platform has no home directory.
pub fn user_config_file() -> Option<PathBuf> {
    ProjectDirs::from("org", "Fossil", "fossil").map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    user_config: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "FOSSIL".to_string(),
            user_config: user_config_file(),
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Set the environment variable prefix (default: "FOSSIL")
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Read user defaults from `file` instead of the XDG location
    pub fn with_user_config(mut self, file: impl Into<PathBuf>) -> Self {
        self.user_config = Some(file.into());
        self
    }

    /// Skip the user defaults layer
    pub fn without_user_config(mut self) -> Self {
        self.user_config = None;
        self
    }

    /// Config files in ascending precedence; missing files are skipped.
    fn config_files(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.user_config
            .iter()
            .cloned()
            .chain([
                self.project_dir.join(PROJECT_CONFIG_FILE),
                self.project_dir.join(LOCAL_CONFIG_FILE),
            ])
            .filter(|file| file.is_file())
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<FossilConfig> {
        let defaults = FossilConfig::default();
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&defaults).context("Failed to encode defaults")?);

        for file in self.config_files() {
            builder = builder.add_source(config::File::from(file).format(config::FileFormat::Toml));
        }

        // FOSSIL_RECEIPT__MUSEUM_NAME -> receipt.museum_name
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__"),
        );

        let mut fossil_config: FossilConfig = builder
            .build()
            .context("Failed to build configuration")?
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        fossil_config.validate()?;
        fossil_config.resolve_paths(&self.project_dir);

        Ok(fossil_config)
    }

    /// Load configuration or fall back to defaults rooted at the project dir
    pub fn load_or_default(self) -> FossilConfig {
        let project_dir = self.project_dir.clone();
        self.load().unwrap_or_else(|_| {
            let mut config = FossilConfig::default();
            config.resolve_paths(project_dir);
            config
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
