//! Config file settings merged with command line overrides

use crate::cli::LogLevel;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tiddlyport_config::{ConfigLoader, TiddlyportConfig};
use tiddlyport_core::{ExportOptions, ImportOptions};
use tracing_subscriber::filter::LevelFilter;

/// Settings for one CLI run
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub settings: TiddlyportConfig,
}

impl CliConfig {
    /// Load from `path`, or the default location when not given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let settings = ConfigLoader::load(path).with_context(|| match path {
            Some(path) => format!("loading config from {}", path.display()),
            None => "loading default config".to_string(),
        })?;
        Ok(Self { settings })
    }

    /// Level to log at: explicit flag, then `-v`, then the config file
    pub fn log_filter(&self, flag: Option<LogLevel>, verbose: bool) -> LevelFilter {
        if let Some(level) = flag {
            return level.into();
        }
        if verbose {
            return LevelFilter::DEBUG;
        }
        // validated on load, so this only falls back for hand-built configs
        self.settings
            .logging
            .level
            .to_ascii_lowercase()
            .parse()
            .unwrap_or(LevelFilter::WARN)
    }

    /// Root title from the flag, else from config
    pub fn toc_title<'a>(&'a self, flag: Option<&'a str>) -> Option<&'a str> {
        flag.or(self.settings.toc_title())
    }

    pub fn export_options(&self, no_front_matter: bool) -> ExportOptions {
        ExportOptions {
            front_matter: self.settings.export.front_matter && !no_front_matter,
        }
    }

    pub fn import_options(&self) -> ImportOptions {
        ImportOptions {
            extract_inline_tags: self.settings.import.extract_inline_tags,
        }
    }

    pub fn skip_hidden(&self) -> bool {
        self.settings.import.skip_hidden
    }

    /// Vault directory from the flag, else from config
    pub fn output_dir(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        flag.or_else(|| self.settings.export.output_dir.clone())
            .context("no output directory: pass --output or set export.output_dir")
    }
}
