pub mod convert;
pub mod export;
pub mod import;
pub mod parse;
pub mod tree;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Raw contents of `file`, or all of stdin when no file is given
pub(crate) fn read_input_bytes(file: Option<&Path>) -> Result<Vec<u8>> {
    match file {
        Some(path) => std::fs::read(path).with_context(|| format!("reading {}", path.display())),
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("reading stdin")?;
            Ok(bytes)
        }
    }
}

/// Like [`read_input_bytes`], decoded as UTF-8
pub(crate) fn read_input(file: Option<&Path>) -> Result<String> {
    let bytes = read_input_bytes(file)?;
    String::from_utf8(bytes).context("input is not valid UTF-8")
}
