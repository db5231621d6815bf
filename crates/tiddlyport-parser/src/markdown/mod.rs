//! Obsidian-flavoured Markdown grammar

mod blocks;
mod inline;

pub use blocks::parse_blocks;
pub use inline::parse_inline;

use crate::ast::{Dialect, Document, Inline};
use crate::error::ParseFailure;
use crate::grammar::Grammar;

/// Block and inline grammar for Markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownGrammar;

impl Grammar for MarkdownGrammar {
    fn dialect(&self) -> Dialect {
        Dialect::Markdown
    }

    fn parse(&self, text: &str) -> Result<Document, ParseFailure> {
        parse_blocks(text)
    }

    fn parse_inline(&self, text: &str) -> Vec<Inline> {
        parse_inline(text)
    }
}
