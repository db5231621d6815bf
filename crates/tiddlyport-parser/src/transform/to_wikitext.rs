//! Markdown tree → wikitext text
//!
//! Two conversions do not survive a wikitext round trip unchanged:
//! - `[[Word]]` with a CamelCase target comes out as the bare word, since
//!   wikitext links CamelCase words implicitly. So `[[HelloThere]]` in
//!   wikitext returns as `HelloThere`.
//! - Quotes always come out between `<<<` fences, so a `>`-prefixed
//!   wikitext quote returns fenced.

use super::Writer;
use crate::ast::{Block, Dialect, Inline};
use crate::lexical::is_camel_case;
use crate::lines::CODE_FENCE;
use crate::wikitext::QUOTE_FENCE;

/// Emits TiddlyWiki wikitext
#[derive(Debug, Clone, Copy, Default)]
pub struct WikitextWriter;

impl Writer for WikitextWriter {
    fn dialect(&self) -> Dialect {
        Dialect::Wikitext
    }

    fn write_block(&self, block: &Block) -> String {
        match block {
            Block::Heading { depth, content } => {
                format!("{} {}", "!".repeat(*depth), self.write_inlines(content))
            }
            Block::ListItem {
                kind,
                depth,
                content,
            } => {
                let markers = kind.wikitext_marker().to_string().repeat(*depth);
                format!("{markers} {}", self.write_inlines(content))
            }
            // quotes always come out fenced, whatever the source used
            Block::BlockQuote {
                lines, citation, ..
            } => {
                let mut out = format!("{QUOTE_FENCE}\n");
                for line in lines {
                    out.push_str(&self.write_inlines(line));
                    out.push('\n');
                }
                out.push_str(QUOTE_FENCE);
                if let Some(citation) = citation {
                    out.push(' ');
                    out.push_str(&self.write_inlines(citation));
                }
                out
            }
            Block::CodeBlock { info, body } => {
                let mut out = format!("{CODE_FENCE}{info}\n");
                for line in body {
                    out.push_str(line);
                    out.push('\n');
                }
                out.push_str(CODE_FENCE);
                out
            }
            Block::Paragraph { content } => self.write_inlines(content),
            Block::Blank(raw) => raw.clone(),
        }
    }

    fn write_inline(&self, node: &Inline, out: &mut String) {
        match node {
            Inline::Text(text) => out.push_str(text),
            Inline::Bold(children) => {
                out.push_str("''");
                out.push_str(&self.write_inlines(children));
                out.push_str("''");
            }
            Inline::Italic(children) => {
                out.push_str("//");
                out.push_str(&self.write_inlines(children));
                out.push_str("//");
            }
            Inline::Strike(children) => {
                out.push_str("~~");
                out.push_str(&self.write_inlines(children));
                out.push_str("~~");
            }
            Inline::Code(code) => {
                out.push('`');
                out.push_str(code);
                out.push('`');
            }
            Inline::InternalLink {
                target,
                display: Some(display),
            } => out.push_str(&format!("[[{display}|{target}]]")),
            Inline::InternalLink {
                target,
                display: None,
            } if is_camel_case(target) => out.push_str(target),
            Inline::InternalLink {
                target,
                display: None,
            } => out.push_str(&format!("[[{target}]]")),
            Inline::ExternalLink { url, display } if display.is_empty() || display == url => {
                out.push_str(&format!("[[{url}]]"))
            }
            Inline::ExternalLink { url, display } => {
                out.push_str(&format!("[[{display}|{url}]]"))
            }
            Inline::Image { target, display } => match display.as_deref() {
                Some(display) if !display.is_empty() && display != target.as_str() => {
                    out.push_str(&format!("[img[{display}|{target}]]"))
                }
                _ => out.push_str(&format!("[img[{target}]]")),
            },
            Inline::Autolink(url) => out.push_str(url),
            Inline::CamelCaseLink {
                word,
                escaped: true,
            } => {
                out.push('~');
                out.push_str(word);
            }
            Inline::CamelCaseLink {
                word,
                escaped: false,
            } => out.push_str(word),
        }
    }
}
