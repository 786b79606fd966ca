//! Configuration System
//!
//! Layered configuration: built-in defaults, then the XDG user file
//! (`~/.config/rigkit/config.toml`), then the workspace file
//! (`<workspace>/.rigkit/config.toml`), with the workspace winning on
//! conflicts. `rigkit init` materializes the default file.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workspace-relative config file location.
pub const WORKSPACE_CONFIG_FILE: &str = ".rigkit/config.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RigConfig {
    /// System-wide settings
    #[serde(default)]
    pub system: SystemConfig,

    /// Catalog behavior
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// System-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Default workspace root (if not specified)
    #[serde(default = "default_workspace_root")]
    pub default_workspace_root: PathBuf,

    /// Storage paths
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Storage paths, resolved relative to the workspace root when relative.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_path")]
    pub data_path: PathBuf,
}

/// Catalog behavior knobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Seed the sample part set when no persisted catalog exists.
    #[serde(default = "default_true")]
    pub seed_on_empty: bool,
}

fn default_workspace_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_data_path() -> PathBuf {
    PathBuf::from(".rigkit/state")
}

fn default_true() -> bool {
    true
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            default_workspace_root: default_workspace_root(),
            storage: StorageConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_path: default_data_path(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            seed_on_empty: default_true(),
        }
    }
}

impl StorageConfig {
    /// Resolve the sled data path against the workspace root.
    pub fn resolve_data_path(&self, workspace_root: &Path) -> PathBuf {
        if self.data_path.is_absolute() {
            self.data_path.clone()
        } else {
            workspace_root.join(&self.data_path)
        }
    }
}

/// Loader for the layered configuration.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace: defaults, then XDG file, then
    /// workspace file. Missing files are fine; malformed files are errors.
    pub fn load(workspace_root: &Path) -> Result<RigConfig, ApiError> {
        let mut builder = Config::builder()
            .set_default("system.default_workspace_root", ".")?
            .set_default("system.storage.data_path", ".rigkit/state")?
            .set_default("catalog.seed_on_empty", true)?;

        if let Some(xdg_path) = Self::xdg_config_path() {
            builder = builder.add_source(File::from(xdg_path).required(false));
        }

        let workspace_file = workspace_root.join(WORKSPACE_CONFIG_FILE);
        builder = builder.add_source(File::from(workspace_file).required(false));

        let config = builder.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Load a single config file, bypassing layering. Used by `--config`.
    pub fn load_from_file(path: &Path) -> Result<RigConfig, ApiError> {
        let config = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .build()?;
        Ok(config.try_deserialize()?)
    }

    /// Path of the XDG user config file, if a home directory is known.
    pub fn xdg_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "rigkit")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Write the default configuration to the workspace file. Refuses to
    /// overwrite unless `force` is set. Returns the written path.
    pub fn write_default(workspace_root: &Path, force: bool) -> Result<PathBuf, ApiError> {
        let path = workspace_root.join(WORKSPACE_CONFIG_FILE);
        if path.exists() && !force {
            return Err(ApiError::ConfigError(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ApiError::ConfigError(format!("cannot create {}: {}", parent.display(), e)))?;
        }

        let doc = toml::to_string_pretty(&RigConfig::default())
            .map_err(|e| ApiError::ConfigError(format!("cannot serialize defaults: {}", e)))?;
        std::fs::write(&path, doc)
            .map_err(|e| ApiError::ConfigError(format!("cannot write {}: {}", path.display(), e)))?;

        Ok(path)
    }
}
