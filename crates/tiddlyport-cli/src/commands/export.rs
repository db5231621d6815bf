use anyhow::{Context, Result};
use std::path::PathBuf;
use tiddlyport_core::{export_tiddlers, read_tiddlers_json};
use tracing::warn;

use crate::config::CliConfig;

/// Convert a tiddler export into a Markdown vault on disk
pub fn execute(
    config: &CliConfig,
    input: PathBuf,
    toc: Option<String>,
    output: Option<PathBuf>,
    no_front_matter: bool,
) -> Result<()> {
    let output = config.output_dir(output)?;
    let tiddlers = read_tiddlers_json(&input)
        .with_context(|| format!("loading tiddlers from {}", input.display()))?;

    let toc_title = config.toc_title(toc.as_deref());
    let batch = export_tiddlers(&tiddlers, toc_title, &config.export_options(no_front_matter));

    let written = batch
        .write_to(&output)
        .with_context(|| format!("writing vault to {}", output.display()))?;

    for dir in batch.directories() {
        println!("{dir}/");
    }
    println!(
        "Exported {written} notes to {} ({} failed to parse)",
        output.display(),
        batch.failures()
    );
    for note in batch.notes().iter().filter(|n| n.failed) {
        warn!(title = %note.title, file = %note.file_path, "written with failure text");
    }
    Ok(())
}
