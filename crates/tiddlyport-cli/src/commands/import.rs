use anyhow::{Context, Result};
use std::path::PathBuf;
use tiddlyport_core::{read_markdown_dir, tiddlers_to_json, write_tiddlers_json};

use crate::config::CliConfig;

/// Read a Markdown vault and emit TiddlyWiki JSON
pub fn execute(config: &CliConfig, dir: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let tiddlers = read_markdown_dir(&dir, &config.import_options(), config.skip_hidden())
        .with_context(|| format!("reading vault {}", dir.display()))?;

    match output {
        Some(path) => {
            write_tiddlers_json(&tiddlers, &path)?;
            eprintln!("Imported {} notes into {}", tiddlers.len(), path.display());
        }
        None => println!("{}", tiddlers_to_json(&tiddlers)?),
    }
    Ok(())
}
