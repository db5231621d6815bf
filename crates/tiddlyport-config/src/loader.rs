//! Configuration file discovery and loading

use crate::config::{ConfigError, ConfigResult, TiddlyportConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// File formats a config can be written in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.toml`
    Toml,
    /// `.yaml` / `.yml`
    Yaml,
    /// `.json`
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> ConfigResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(Self::Toml),
            "yaml" | "yml" => Ok(Self::Yaml),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Yaml => "yaml",
            Self::Json => "json",
        }
    }
}

/// Loads [`TiddlyportConfig`] from disk
pub struct ConfigLoader;

impl ConfigLoader {
    /// Default config location: `<config dir>/tiddlyport/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tiddlyport").join("config.toml"))
    }

    /// Load and validate the file at `path`, picking the format from its extension
    pub fn load_from_file(path: impl AsRef<Path>) -> ConfigResult<TiddlyportConfig> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::load_from_str(&contents, format)?;
        info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate `contents` as `format`
    pub fn load_from_str(contents: &str, format: ConfigFormat) -> ConfigResult<TiddlyportConfig> {
        let parse_error = |message: String| ConfigError::Parse {
            format: format.name(),
            message,
        };

        let config: TiddlyportConfig = match format {
            #[cfg(feature = "toml")]
            ConfigFormat::Toml => toml::from_str(contents).map_err(|e| parse_error(e.to_string()))?,
            #[cfg(feature = "yaml")]
            ConfigFormat::Yaml => {
                serde_yaml::from_str(contents).map_err(|e| parse_error(e.to_string()))?
            }
            ConfigFormat::Json => {
                serde_json::from_str(contents).map_err(|e| parse_error(e.to_string()))?
            }
            #[allow(unreachable_patterns)]
            other => return Err(ConfigError::UnsupportedFormat(other.name().to_string())),
        };

        config.validate()?;
        Ok(config)
    }

    /// Load the default config file, or defaults when there is none
    pub fn load_default() -> ConfigResult<TiddlyportConfig> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from_file(path),
            _ => {
                debug!("no config file found, using defaults");
                Ok(TiddlyportConfig::default())
            }
        }
    }

    /// Load `path` when given, otherwise the default location
    pub fn load(path: Option<&Path>) -> ConfigResult<TiddlyportConfig> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Self::load_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        assert_eq!(ConfigFormat::from_path(Path::new("a.toml")).unwrap(), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.YML")).unwrap(), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("a.json")).unwrap(), ConfigFormat::Json);
        assert!(matches!(
            ConfigFormat::from_path(Path::new("config")),
            Err(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_default_path_location() {
        if let Some(path) = ConfigLoader::default_path() {
            assert!(path.ends_with("tiddlyport/config.toml"));
        }
    }

    #[test]
    fn test_parse_error_names_format() {
        let err = ConfigLoader::load_from_str("{not json", ConfigFormat::Json).unwrap_err();
        assert!(err.to_string().starts_with("Failed to parse json config"));
    }
}
