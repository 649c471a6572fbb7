// Configuration module for rules-manager
// This module handles loading and saving the rules record, by default from
// ~/.config/rules-manager/config.toml

mod types;

pub use types::{Config, DEFAULT_RULE};

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RulesError;
use crate::host::ConfigStore;

const CONFIG_DIR: &str = "rules-manager";
const CONFIG_FILE: &str = "config.toml";

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
    /// False when the stored record could not be read. Saving would then
    /// replace the owner's file with defaults, so it must stay untouched.
    pub writable: bool,
}

/// On-disk encoding, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }

    pub fn parse(self, contents: &str) -> Result<Config, RulesError> {
        Ok(match self {
            ConfigFormat::Toml => toml::from_str(contents)?,
            ConfigFormat::Json => serde_json::from_str(contents)?,
        })
    }

    pub fn serialize(self, config: &Config) -> Result<String, RulesError> {
        Ok(match self {
            ConfigFormat::Toml => toml::to_string_pretty(config)?,
            ConfigFormat::Json => serde_json::to_string_pretty(config)?,
        })
    }
}

/// Rules record stored in a single file.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
    format: ConfigFormat,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = ConfigFormat::from_path(&path);
        Self { path, format }
    }

    /// Store at ~/.config/rules-manager/config.toml
    pub fn default_location() -> Result<Self, RulesError> {
        get_config_path()
            .map(Self::new)
            .ok_or(RulesError::NoConfigPath)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> ConfigFormat {
        self.format
    }
}

impl ConfigStore for FileConfigStore {
    fn read_config(&self) -> Result<Option<Config>, RulesError> {
        if !self.path.exists() {
            #[cfg(debug_assertions)]
            log::debug!("Config file {:?} does not exist", self.path);
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)?;
        #[cfg(debug_assertions)]
        log::debug!("Config file read successfully, {} bytes", contents.len());
        self.format.parse(&contents).map(Some)
    }

    fn write_config(&self, config: &Config) -> Result<(), RulesError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = self.format.serialize(config)?;
        fs::write(&self.path, content)?;
        #[cfg(debug_assertions)]
        log::debug!("Config written to {:?}", self.path);
        Ok(())
    }
}

/// Loads the rules record from `store`.
///
/// A missing record yields the defaults and writes them back so the file
/// exists for the server owner to edit. An unreadable record yields the
/// defaults with a warning and is marked read-only so it is left untouched
/// on disk.
pub fn load_config(store: &impl ConfigStore) -> ConfigResult {
    match store.read_config() {
        Ok(Some(config)) => {
            #[cfg(debug_assertions)]
            log::debug!("Config loaded with {} rules", config.rules.len());
            ConfigResult {
                config,
                warning: None,
                writable: true,
            }
        }
        Ok(None) => {
            log::info!("No existing config found, writing defaults");
            let config = Config::default();
            let warning = store
                .write_config(&config)
                .err()
                .map(|e| format!("Failed to write default config: {}", e));
            ConfigResult {
                config,
                warning,
                writable: true,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to load config: {}", e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!(
                    "Invalid config: {}. Changes will not be saved until it is fixed",
                    e
                )),
                writable: false,
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/rules-manager/config.toml on all platforms for consistency.
pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
