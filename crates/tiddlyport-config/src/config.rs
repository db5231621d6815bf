//! Configuration types, defaults and validation

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Log levels accepted in `logging.level`
pub const LOG_LEVELS: &[&str] = &["off", "error", "warn", "info", "debug", "trace"];

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// The file contents did not parse in the detected format
    #[error("Failed to parse {format} config: {message}")]
    Parse {
        /// Format name (`toml`, `yaml`, `json`)
        format: &'static str,
        /// Parser diagnostic
        message: String,
    },

    /// The extension does not name a supported format
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A value was rejected by validation
    #[error("Invalid value for {field}: {value}")]
    InvalidValue {
        /// Dotted field name
        field: String,
        /// Why the value was rejected
        value: String,
    },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiddlyportConfig {
    /// Folder hierarchy settings
    pub hierarchy: HierarchyConfig,
    /// Tiddlers → Markdown settings
    pub export: ExportConfig,
    /// Markdown → tiddlers settings
    pub import: ImportConfig,
    /// Log output settings
    pub logging: LoggingConfig,
}

/// Folder hierarchy settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HierarchyConfig {
    /// Title of the table of contents note that roots the folder tree
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toc_title: Option<String>,
}

/// Tiddlers → Markdown settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Open each note with a `---` block carrying its tags
    pub front_matter: bool,
    /// Vault directory to write into
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            front_matter: true,
            output_dir: None,
        }
    }
}

/// Markdown → tiddlers settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Turn inline `#tag` tokens into tags
    pub extract_inline_tags: bool,
    /// Skip files and folders whose name starts with `.`
    pub skip_hidden: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            extract_inline_tags: true,
            skip_hidden: true,
        }
    }
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of [`LOG_LEVELS`]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl TiddlyportConfig {
    /// Check values that deserialize fine but make no sense
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(title) = &self.hierarchy.toc_title {
            if title.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "hierarchy.toc_title".to_string(),
                    value: "must not be empty".to_string(),
                });
            }
        }

        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                value: format!(
                    "'{}' is not one of {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        Ok(())
    }

    /// Table of contents title, if configured
    pub fn toc_title(&self) -> Option<&str> {
        self.hierarchy.toc_title.as_deref()
    }
}
