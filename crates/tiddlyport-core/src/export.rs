//! Tiddlers → Markdown vault

use crate::error::{CoreError, CoreResult};
use crate::hierarchy::{directory_listing, resolve, HierarchyNote};
use crate::note::Tiddler;
use std::fs;
use std::path::Path;
use tiddlyport_parser::{try_convert, Dialect};
use tracing::{debug, info, warn};

/// Knobs for [`export_tiddlers`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Prefix each note with a `---` block carrying its tags
    pub front_matter: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { front_matter: true }
    }
}

/// One converted note and where it goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedNote {
    pub title: String,
    /// Markdown file contents, front matter included
    pub content: String,
    pub folder_path: Vec<String>,
    /// `/`-separated path relative to the vault root
    pub file_path: String,
    /// The body failed to parse; `content` carries the failure sentinel
    pub failed: bool,
}

/// Result of converting a whole tiddler collection
#[derive(Debug, Clone, Default)]
pub struct ExportBatch {
    notes: Vec<ExportedNote>,
    failures: usize,
}

impl ExportBatch {
    pub fn notes(&self) -> &[ExportedNote] {
        &self.notes
    }

    /// Number of notes whose body failed to parse
    pub fn failures(&self) -> usize {
        self.failures
    }

    /// Folders the vault needs, sorted, each parent listed before its children
    pub fn directories(&self) -> Vec<String> {
        directory_listing(self.notes.iter().map(|n| n.folder_path.as_slice()))
    }

    /// Write every note below `dir`; returns the number of files written
    pub fn write_to(&self, dir: &Path) -> CoreResult<usize> {
        fs::create_dir_all(dir).map_err(|e| CoreError::file("create", dir, e))?;
        for folder in self.directories() {
            let path = dir.join(&folder);
            fs::create_dir_all(&path).map_err(|e| CoreError::file("create", path, e))?;
        }

        for note in &self.notes {
            let path = dir.join(&note.file_path);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|e| CoreError::file("create", parent, e))?;
            }
            debug!(path = %path.display(), "writing note");
            fs::write(&path, &note.content).map_err(|e| CoreError::file("write", path, e))?;
        }

        info!(
            notes = self.notes.len(),
            dir = %dir.display(),
            "wrote vault"
        );
        Ok(self.notes.len())
    }
}

/// The `---` block that opens an exported note
pub fn front_matter(tags: Option<&str>) -> String {
    match tags.filter(|t| !t.is_empty()) {
        Some(tags) => format!("---\ntags: {tags}\n---\n"),
        None => "---\n---\n".to_string(),
    }
}

/// Convert every tiddler body to Markdown and place it in the hierarchy
/// rooted at `toc_title`.
///
/// A body that fails to parse is recorded with the failure sentinel as its
/// text and counted; the rest of the batch is unaffected.
pub fn export_tiddlers(
    tiddlers: &[Tiddler],
    toc_title: Option<&str>,
    options: &ExportOptions,
) -> ExportBatch {
    let hierarchy: Vec<HierarchyNote> = tiddlers.iter().map(HierarchyNote::from).collect();
    let paths = resolve(&hierarchy, toc_title);

    let mut failures = 0;
    let notes = tiddlers
        .iter()
        .zip(paths)
        .map(|(tiddler, path)| {
            let (body, failed) = match try_convert(&tiddler.text, Dialect::Wikitext) {
                Ok(body) => (body, false),
                Err(failure) => {
                    warn!(title = %tiddler.title, %failure, "tiddler body did not parse");
                    failures += 1;
                    (failure.to_sentinel(), true)
                }
            };
            let content = if options.front_matter {
                front_matter(tiddler.tags.as_deref()) + &body
            } else {
                body
            };
            ExportedNote {
                title: tiddler.title.clone(),
                content,
                file_path: path.file_path(),
                folder_path: path.folder_path,
                failed,
            }
        })
        .collect();

    info!(tiddlers = tiddlers.len(), failures, "converted tiddlers");
    ExportBatch { notes, failures }
}
