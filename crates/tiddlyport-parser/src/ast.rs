//! Parse tree shared by both dialects
//!
//! Both grammars produce the same tree: a [`Document`] holding a flat,
//! ordered run of [`Block`]s, each of which carries parsed [`Inline`]
//! children where the construct has inline content. Writers consume the
//! tree and emit text in the other dialect.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Markup dialect of a note body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// TiddlyWiki wikitext
    Wikitext,
    /// Obsidian-flavoured Markdown
    Markdown,
}

impl Dialect {
    /// Get the string representation of this dialect
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Wikitext => "wikitext",
            Dialect::Markdown => "markdown",
        }
    }

    /// The dialect a conversion from `self` produces
    pub fn other(&self) -> Dialect {
        match self {
            Dialect::Wikitext => Dialect::Markdown,
            Dialect::Markdown => Dialect::Wikitext,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed note body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Blocks in source order
    pub blocks: Vec<Block>,

    /// Whether the source ended with a newline
    pub trailing_newline: bool,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of non-blank blocks
    pub fn content_block_count(&self) -> usize {
        self.blocks
            .iter()
            .filter(|b| !matches!(b, Block::Blank(_)))
            .count()
    }
}

/// List marker family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    /// `*` in wikitext, `-` in Markdown
    Bullet,
    /// `#` in wikitext, `1.` in Markdown
    Numbered,
}

impl ListKind {
    /// Markdown indent width for one nesting level.
    ///
    /// Numbered items indent by the width of `"1. "`.
    pub fn markdown_indent_step(&self) -> usize {
        match self {
            ListKind::Bullet => 2,
            ListKind::Numbered => 3,
        }
    }

    /// Wikitext marker character, repeated once per nesting level
    pub fn wikitext_marker(&self) -> char {
        match self {
            ListKind::Bullet => '*',
            ListKind::Numbered => '#',
        }
    }
}

/// Leads the attribution line of a Markdown quote (U+2014)
pub const CITATION_DASH: char = '\u{2014}';

/// How a block quote was delimited in the source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// `<<<` fences around the quoted lines (wikitext)
    Fenced,
    /// every line starts with `>`
    Prefixed,
}

/// Block-level construct
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Block {
    /// Heading; `depth` counts the marker characters (1-based)
    Heading { depth: usize, content: Vec<Inline> },

    /// A single list item; `depth` is 1 for top-level items
    ListItem {
        kind: ListKind,
        depth: usize,
        content: Vec<Inline>,
    },

    /// Quoted lines, each parsed independently
    BlockQuote {
        style: QuoteStyle,
        lines: Vec<Vec<Inline>>,
        /// Attribution: the text after a closing `<<<` in wikitext, or a
        /// last quote line led by [`CITATION_DASH`] in Markdown
        #[serde(default, skip_serializing_if = "Option::is_none")]
        citation: Option<Vec<Inline>>,
    },

    /// Fenced code; `info` is whatever followed the opening fence
    CodeBlock { info: String, body: Vec<String> },

    /// One or more merged lines of inline content
    Paragraph { content: Vec<Inline> },

    /// A whitespace-only line, kept verbatim
    Blank(String),
}

/// Inline construct
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Inline {
    Text(String),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
    Strike(Vec<Inline>),
    Code(String),

    /// Double-bracket link to another note
    InternalLink {
        target: String,
        display: Option<String>,
    },

    /// Link to an outside resource; `display` may be empty
    ExternalLink { url: String, display: String },

    /// Embedded image
    Image {
        target: String,
        display: Option<String>,
    },

    /// Bare URL
    Autolink(String),

    /// Bare CamelCase word. `escaped` words are plain text, not links.
    CamelCaseLink { word: String, escaped: bool },
}

impl Inline {
    /// Plain text node
    pub fn text(s: impl Into<String>) -> Self {
        Inline::Text(s.into())
    }

    /// Whether this node links somewhere
    pub fn is_link(&self) -> bool {
        match self {
            Inline::InternalLink { .. }
            | Inline::ExternalLink { .. }
            | Inline::Image { .. }
            | Inline::Autolink(_) => true,
            Inline::CamelCaseLink { escaped, .. } => !escaped,
            _ => false,
        }
    }
}

/// Accumulates inline nodes, merging adjacent text runs
#[derive(Debug, Default)]
pub(crate) struct InlineBuilder {
    nodes: Vec<Inline>,
    text: String,
}

impl InlineBuilder {
    pub(crate) fn push_text(&mut self, s: &str) {
        self.text.push_str(s);
    }

    pub(crate) fn push(&mut self, node: Inline) {
        self.flush();
        self.nodes.push(node);
    }

    fn flush(&mut self) {
        if !self.text.is_empty() {
            self.nodes.push(Inline::Text(std::mem::take(&mut self.text)));
        }
    }

    pub(crate) fn finish(mut self) -> Vec<Inline> {
        self.flush();
        self.nodes
    }
}
