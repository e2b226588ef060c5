use crate::utils::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_TODO_FILE: &str = "todo_list.json";
pub const DEFAULT_CONTACTS_FILE: &str = "contacts.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_color")]
    pub color: bool,
}

/// Locations of the persisted collections, relative to the working directory
/// unless given as absolute paths.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub todo_file: PathBuf,
    pub contacts_file: PathBuf,
}

fn default_color() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            todo_file: PathBuf::from(DEFAULT_TODO_FILE),
            contacts_file: PathBuf::from(DEFAULT_CONTACTS_FILE),
        }
    }
}

impl Config {
    /// Load an explicitly requested config file. Unlike the storage files, a
    /// missing config file is an error.
    pub fn load_custom(config_path: &Path) -> AppResult<Self> {
        if !config_path.exists() {
            return Err(AppError::Config(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }

        let content =
            std::fs::read_to_string(config_path).map_err(|e| AppError::Io(e.to_string()))?;

        let config = Self::from_toml_str(&content)?;
        log::debug!("loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Command-line flags take precedence over the file.
    pub fn apply_overrides(
        &mut self,
        todo_file: Option<PathBuf>,
        contacts_file: Option<PathBuf>,
        no_color: bool,
    ) {
        if let Some(path) = todo_file {
            self.storage.todo_file = path;
        }
        if let Some(path) = contacts_file {
            self.storage.contacts_file = path;
        }
        if no_color {
            self.general.color = false;
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.storage.todo_file.as_os_str().is_empty() {
            return Err(AppError::Config("To-do file path cannot be empty".to_string()));
        }

        if self.storage.contacts_file.as_os_str().is_empty() {
            return Err(AppError::Config(
                "Contacts file path cannot be empty".to_string(),
            ));
        }

        // Both collections are JSON arrays of different shapes.
        if self.storage.todo_file == self.storage.contacts_file {
            return Err(AppError::Config(
                "To-do and contacts files must be different".to_string(),
            ));
        }

        Ok(())
    }
}
