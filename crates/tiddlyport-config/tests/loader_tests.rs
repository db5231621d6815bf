//! Config loading from files in each supported format

use std::fs;
use tempfile::TempDir;
use tiddlyport_config::{ConfigError, ConfigLoader, TiddlyportConfig};

#[test]
fn test_load_toml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"
[hierarchy]
toc_title = "Contents"

[export]
front_matter = false
output_dir = "vault"

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.toc_title(), Some("Contents"));
    assert!(!config.export.front_matter);
    assert_eq!(config.export.output_dir.as_deref(), Some(std::path::Path::new("vault")));
    assert!(config.import.extract_inline_tags);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_load_yaml() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.yml");
    fs::write(&path, "import:\n  skip_hidden: false\n").unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert!(!config.import.skip_hidden);
    assert!(config.export.front_matter);
}

#[test]
fn test_load_json() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.json");
    fs::write(&path, r#"{"hierarchy": {"toc_title": "TableOfContents"}}"#).unwrap();

    let config = ConfigLoader::load_from_file(&path).unwrap();
    assert_eq!(config.toc_title(), Some("TableOfContents"));
}

#[test]
fn test_toml_round_trip() {
    let mut config = TiddlyportConfig::default();
    config.hierarchy.toc_title = Some("Contents".to_string());
    config.import.skip_hidden = false;

    let text = toml::to_string(&config).unwrap();
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, text).unwrap();

    assert_eq!(ConfigLoader::load_from_file(&path).unwrap(), config);
}

#[test]
fn test_invalid_values_fail_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[logging]\nlevel = \"chatty\"\n").unwrap();

    let err = ConfigLoader::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = ConfigLoader::load_from_file(temp.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn test_load_without_path_falls_back() {
    // only meaningful where no user config exists; must never error on defaults
    if ConfigLoader::default_path().is_some_and(|p| p.is_file()) {
        return;
    }
    assert_eq!(ConfigLoader::load(None).unwrap(), TiddlyportConfig::default());
}
