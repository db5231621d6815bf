use anyhow::{Context, Result};
use std::path::PathBuf;
use tiddlyport_core::{directory_listing, read_tiddlers_json, resolve, HierarchyNote};

use crate::config::CliConfig;

/// Print each tiddler's resolved vault path, then the folders needed
pub fn execute(config: &CliConfig, input: PathBuf, toc: Option<String>) -> Result<()> {
    let tiddlers = read_tiddlers_json(&input)
        .with_context(|| format!("loading tiddlers from {}", input.display()))?;

    let notes: Vec<HierarchyNote> = tiddlers.iter().map(HierarchyNote::from).collect();
    let resolved = resolve(&notes, config.toc_title(toc.as_deref()));

    for path in &resolved {
        println!("{}\t{}", path.file_path(), path.title);
    }

    let dirs = directory_listing(resolved.iter().map(|r| r.folder_path.as_slice()));
    if !dirs.is_empty() {
        println!();
        for dir in dirs {
            println!("{dir}/");
        }
    }
    Ok(())
}
