//! # Tiddlyport Configuration
//!
//! Typed settings for the conversion tools, loaded from TOML, YAML or JSON.
//! Every field has a default, so an absent or partial file is fine.
//!
//! ```rust,no_run
//! use tiddlyport_config::ConfigLoader;
//!
//! let config = ConfigLoader::load_from_file("tiddlyport.toml")?;
//! println!("toc: {:?}", config.toc_title());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod loader;

pub use config::*;
pub use loader::*;
