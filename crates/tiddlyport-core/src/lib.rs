//! Note collections for tiddlyport
//!
//! Holds the [`Tiddler`] model, the tag containment [`hierarchy`] resolver,
//! and batch export (tiddlers → Markdown vault) and import (vault →
//! tiddlers) on top of `tiddlyport-parser`. The [`store`] module does the
//! file I/O; everything else is pure.

pub mod error;
pub mod export;
pub mod hierarchy;
pub mod import;
pub mod note;
pub mod store;

pub use error::{CoreError, CoreResult};
pub use export::{export_tiddlers, front_matter, ExportBatch, ExportOptions, ExportedNote};
pub use hierarchy::{directory_listing, resolve, ContainmentGraph, HierarchyNote, ResolvedPath};
pub use import::{extract_inline_tags, import_markdown, import_markdown_with, ImportOptions};
pub use note::{format_tags, note_file_name, parse_tags, sanitize_segment, Tiddler};
pub use store::{
    parse_tiddlers_json, read_markdown_dir, read_tiddlers_json, tiddlers_to_json,
    write_tiddlers_json,
};
