//! Note store adapter: TiddlyWiki JSON files and Markdown vault directories

use crate::error::{CoreError, CoreResult};
use crate::import::{import_markdown_with, ImportOptions};
use crate::note::Tiddler;
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// Parse a TiddlyWiki JSON export: an array of tiddler objects
pub fn parse_tiddlers_json(json: &str) -> CoreResult<Vec<Tiddler>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a TiddlyWiki JSON export from disk
pub fn read_tiddlers_json(path: &Path) -> CoreResult<Vec<Tiddler>> {
    let json = fs::read_to_string(path).map_err(|e| CoreError::file("read", path, e))?;
    let tiddlers = parse_tiddlers_json(&json)?;
    info!(count = tiddlers.len(), path = %path.display(), "loaded tiddlers");
    Ok(tiddlers)
}

/// Serialize tiddlers in the array form TiddlyWiki imports
pub fn tiddlers_to_json(tiddlers: &[Tiddler]) -> CoreResult<String> {
    Ok(serde_json::to_string_pretty(tiddlers)?)
}

pub fn write_tiddlers_json(tiddlers: &[Tiddler], path: &Path) -> CoreResult<()> {
    let json = tiddlers_to_json(tiddlers)?;
    fs::write(path, json).map_err(|e| CoreError::file("write", path, e))?;
    info!(count = tiddlers.len(), path = %path.display(), "wrote tiddlers");
    Ok(())
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn is_markdown_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

/// Import every `*.md` file below `dir`, in sorted path order.
///
/// Entries whose name starts with `.` are skipped (with everything below
/// them) when `skip_hidden` is set.
pub fn read_markdown_dir(
    dir: &Path,
    options: &ImportOptions,
    skip_hidden: bool,
) -> CoreResult<Vec<Tiddler>> {
    let mut tiddlers = Vec::new();

    let walker = WalkDir::new(dir)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !(skip_hidden && is_hidden(e)));

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_markdown_file(path) {
            continue;
        }

        let content = fs::read_to_string(path).map_err(|e| CoreError::file("read", path, e))?;
        let file_name = entry.file_name().to_string_lossy();
        debug!(path = %path.display(), "importing note");
        tiddlers.push(import_markdown_with(&content, &file_name, options));
    }

    info!(count = tiddlers.len(), dir = %dir.display(), "imported vault");
    Ok(tiddlers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_array() {
        let json = r#"[
            {"title": "A", "text": "''a''", "tags": "B", "created": "20240101000000000", "modified": "20240101000000000"},
            {"title": "B", "text": "b"}
        ]"#;
        let tiddlers = parse_tiddlers_json(json).unwrap();
        assert_eq!(tiddlers.len(), 2);
        assert_eq!(tiddlers[0].tags.as_deref(), Some("B"));
        assert_eq!(tiddlers[1].created, "");
    }

    #[test]
    fn test_rejects_non_array() {
        let err = parse_tiddlers_json(r#"{"fields": [], "data": []}"#).unwrap_err();
        assert!(err.is_input_error());
    }

    #[test]
    fn test_json_omits_missing_tags() {
        let tiddler = Tiddler {
            title: "A".into(),
            text: "x".into(),
            tags: None,
            created: "1".into(),
            modified: "2".into(),
        };
        let json = tiddlers_to_json(&[tiddler]).unwrap();
        assert!(!json.contains("tags"));
        assert!(json.trim_start().starts_with('['));
    }
}
