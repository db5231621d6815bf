use anyhow::{anyhow, Result};
use std::io::Write;
use std::path::PathBuf;
use tiddlyport_parser::{convert_bytes, Dialect};
use tracing::debug;

use super::read_input_bytes;

/// Convert one body from `from` into the other dialect and print it
pub fn execute(file: Option<PathBuf>, from: Dialect) -> Result<()> {
    let bytes = read_input_bytes(file.as_deref())?;
    debug!(bytes = bytes.len(), %from, "converting body");

    let converted = convert_bytes(&bytes, from).map_err(|err| match err.as_parse_failure() {
        Some(failure) => anyhow!(failure.to_sentinel()),
        None => anyhow::Error::new(err),
    })?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(converted.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
