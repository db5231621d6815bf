//! Grammars and transformer for TiddlyWiki wikitext and Obsidian Markdown
//!
//! Both dialects parse into the shared tree in [`ast`]; a [`Writer`] emits a
//! tree as the other dialect. The [`convert`](mod@convert) module ties the two together
//! for per-note conversion:
//!
//! ```
//! use tiddlyport_parser::{convert_to_markdown, convert_to_wikitext};
//!
//! assert_eq!(convert_to_markdown("! Title\n* ''bold'' item"), "# Title\n- **bold** item");
//! assert_eq!(convert_to_wikitext("[[Target|Shown]]"), "[[Shown|Target]]");
//! ```
//!
//! Parsing never touches the filesystem and keeps no state between calls.

pub mod ast;
pub mod convert;
pub mod error;
pub mod grammar;
pub mod lexical;
mod lines;
pub mod markdown;
pub mod transform;
pub mod wikitext;

pub use ast::{Block, Dialect, Document, Inline, ListKind, QuoteStyle};
pub use convert::{
    convert, convert_bytes, convert_to_markdown, convert_to_wikitext, parse, render,
    try_convert, try_convert_to_markdown, try_convert_to_wikitext,
};
pub use error::{
    is_failure_sentinel, ParseFailure, ParserError, ParserResult, FAILURE_PREFIX,
};
pub use grammar::Grammar;
pub use lexical::{is_camel_case, is_url};
pub use markdown::MarkdownGrammar;
pub use transform::{MarkdownWriter, WikitextWriter, Writer};
pub use wikitext::WikitextGrammar;
