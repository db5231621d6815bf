//! TiddlyWiki wikitext grammar

mod blocks;
mod inline;

pub use blocks::{parse_blocks, QUOTE_FENCE};
pub use inline::parse_inline;

use crate::ast::{Dialect, Document, Inline};
use crate::error::ParseFailure;
use crate::grammar::Grammar;

/// Block and inline grammar for wikitext
#[derive(Debug, Clone, Copy, Default)]
pub struct WikitextGrammar;

impl Grammar for WikitextGrammar {
    fn dialect(&self) -> Dialect {
        Dialect::Wikitext
    }

    fn parse(&self, text: &str) -> Result<Document, ParseFailure> {
        parse_blocks(text)
    }

    fn parse_inline(&self, text: &str) -> Vec<Inline> {
        parse_inline(text)
    }
}
