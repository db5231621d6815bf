use anyhow::{Context, Result};
use std::path::PathBuf;
use tiddlyport_parser::{parse, Dialect};
use tracing::info;

use super::read_input;

/// Print the parse tree of one body as pretty JSON
pub fn execute(file: Option<PathBuf>, dialect: Dialect) -> Result<()> {
    let text = read_input(file.as_deref())?;
    let doc = parse(&text, dialect).map_err(|failure| anyhow::anyhow!(failure.to_sentinel()))?;
    info!(
        blocks = doc.blocks.len(),
        content_blocks = doc.content_block_count(),
        "parsed body"
    );

    let json = serde_json::to_string_pretty(&doc).context("serializing parse tree")?;
    println!("{json}");
    Ok(())
}
