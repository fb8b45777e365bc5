//! Configuration module for bear2obsidian
//!
//! Holds the naming conventions the converter relies on (attachments folder,
//! note extension, hidden-entry prefix) plus display preferences. Values are
//! read from a TOML file in the user's config directory when one exists; the
//! converter never writes it.

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Component, Path, PathBuf};

/// Canonical attachments folder used by Obsidian vaults converted from Bear
pub const DEFAULT_ATTACHMENTS_DIR: &str = "_attachments";

/// Path display format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum PathFormat {
    /// Display absolute paths
    #[default]
    Absolute,
    /// Display relative paths (relative to current directory)
    Relative,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ConverterConfig {
    /// Folder that per-note attachment folders are merged into
    pub attachments_dir: String,

    /// Extension (without the dot) identifying note files
    pub note_extension: String,

    /// Entries whose name starts with this prefix are never moved
    pub hidden_prefix: String,

    /// Suppress informational output by default
    pub quiet: bool,

    /// Default format for displaying paths (absolute or relative)
    pub path_format: PathFormat,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            attachments_dir: DEFAULT_ATTACHMENTS_DIR.to_string(),
            note_extension: "md".to_string(),
            hidden_prefix: ".".to_string(),
            quiet: false,
            path_format: PathFormat::Absolute,
        }
    }
}

impl ConverterConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("bear2obsidian").join("config.toml"))
    }

    /// Load configuration
    ///
    /// An explicit path must exist. Without one, the file in the user's
    /// config directory is used when present, and defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or holds
    /// invalid values.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::config_path() {
                Ok(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text is not valid TOML or holds invalid values.
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the folder and extension names are usable
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` describing the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.attachments_dir.is_empty() {
            return Err(ConfigError::Message("attachments_dir must not be empty".to_string()));
        }
        let mut components = Path::new(&self.attachments_dir).components();
        let single_folder = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );
        if !single_folder || self.attachments_dir.contains(['/', '\\']) {
            return Err(ConfigError::Message(format!(
                "attachments_dir '{}' must be a single folder name",
                self.attachments_dir
            )));
        }
        if self.note_extension.is_empty() {
            return Err(ConfigError::Message("note_extension must not be empty".to_string()));
        }
        Ok(())
    }

    /// Whether `name` is a hidden entry that must be left alone
    #[must_use]
    pub fn is_hidden(&self, name: &str) -> bool {
        !self.hidden_prefix.is_empty() && name.starts_with(&self.hidden_prefix)
    }

    /// Whether `path` names a note file
    #[must_use]
    pub fn is_note(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|ext| ext.to_string_lossy() == self.note_extension.trim_start_matches('.'))
    }
}
