//! Semantic transformer: one writer per target dialect
//!
//! Writers walk a [`Document`] and emit text in their dialect, dispatching
//! on node type and recursing into inline children.

mod to_markdown;
mod to_wikitext;

pub use to_markdown::MarkdownWriter;
pub use to_wikitext::WikitextWriter;

use crate::ast::{Block, Dialect, Document, Inline};

/// Emits a parse tree as text in one dialect
pub trait Writer: Send + Sync {
    /// Dialect this writer emits
    fn dialect(&self) -> Dialect;

    /// Text for one block, without a trailing newline
    fn write_block(&self, block: &Block) -> String;

    /// Append one inline node to `out`
    fn write_inline(&self, node: &Inline, out: &mut String);

    fn write_inlines(&self, nodes: &[Inline]) -> String {
        let mut out = String::new();
        for node in nodes {
            self.write_inline(node, &mut out);
        }
        out
    }

    /// Whether `block` has a form in this dialect at all
    fn emits(&self, _block: &Block) -> bool {
        true
    }

    /// Render a whole document, preserving its final newline
    fn render(&self, doc: &Document) -> String {
        let mut out = doc
            .blocks
            .iter()
            .filter(|block| self.emits(block))
            .map(|block| self.write_block(block))
            .collect::<Vec<_>>()
            .join("\n");
        if doc.trailing_newline {
            out.push('\n');
        }
        out
    }
}
