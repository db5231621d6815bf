//! Wikitext tree → Markdown text

use super::Writer;
use crate::ast::{Block, Dialect, Inline, ListKind, CITATION_DASH};
use crate::lexical::is_url;
use crate::lines::{escape_list_marker, CODE_FENCE};

/// Emits Obsidian-flavoured Markdown
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownWriter;

impl MarkdownWriter {
    fn quote_line(&self, line: &[Inline]) -> String {
        if line.is_empty() {
            ">".to_string()
        } else {
            format!("> {}", self.write_inlines(line))
        }
    }
}

impl Writer for MarkdownWriter {
    fn dialect(&self) -> Dialect {
        Dialect::Markdown
    }

    fn write_block(&self, block: &Block) -> String {
        match block {
            Block::Heading { depth, content } => {
                format!("{} {}", "#".repeat(*depth), self.write_inlines(content))
            }
            Block::ListItem {
                kind,
                depth,
                content,
            } => {
                let indent = " ".repeat(kind.markdown_indent_step() * depth.saturating_sub(1));
                let marker = match kind {
                    ListKind::Bullet => "-",
                    ListKind::Numbered => "1.",
                };
                format!("{indent}{marker} {}", self.write_inlines(content))
            }
            Block::BlockQuote {
                lines, citation, ..
            } => {
                let mut quoted: Vec<String> = lines.iter().map(|line| self.quote_line(line)).collect();
                if let Some(citation) = citation {
                    quoted.push(format!("> {CITATION_DASH} {}", self.write_inlines(citation)));
                }
                quoted.join("\n")
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
            Block::Paragraph { content } => {
                let text = self.write_inlines(content);
                text.split('\n')
                    .map(escape_list_marker)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Block::Blank(raw) => raw.clone(),
        }
    }

    /// An empty quote has no Markdown form, so it is dropped
    fn emits(&self, block: &Block) -> bool {
        !matches!(
            block,
            Block::BlockQuote {
                lines,
                citation: None,
                ..
            } if lines.is_empty()
        )
    }

    fn write_inline(&self, node: &Inline, out: &mut String) {
        match node {
            Inline::Text(text) => out.push_str(text),
            Inline::Bold(children) => {
                out.push_str("**");
                out.push_str(&self.write_inlines(children));
                out.push_str("**");
            }
            Inline::Italic(children) => {
                out.push('_');
                out.push_str(&self.write_inlines(children));
                out.push('_');
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
            Inline::InternalLink { target, display } if is_url(target) => {
                // lossy: comes back as an external link
                let text = display.as_deref().unwrap_or(target.as_str());
                out.push_str(&format!("[{text}]({target})"));
            }
            Inline::InternalLink {
                target,
                display: Some(display),
            } => out.push_str(&format!("[[{target}|{display}]]")),
            Inline::InternalLink {
                target,
                display: None,
            } => out.push_str(&format!("[[{target}]]")),
            Inline::ExternalLink { url, display } => {
                let text = if display.is_empty() { url } else { display };
                out.push_str(&format!("[{text}]({url})"));
            }
            Inline::Image { target, display } if is_url(target) => {
                let alt = display
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .unwrap_or(target.as_str());
                out.push_str(&format!("![{alt}]({target})"));
            }
            Inline::Image {
                target,
                display: Some(display),
            } => out.push_str(&format!("![[{target}|{display}]]")),
            Inline::Image {
                target,
                display: None,
            } => out.push_str(&format!("![[{target}]]")),
            Inline::Autolink(url) => out.push_str(url),
            Inline::CamelCaseLink {
                word,
                escaped: true,
            } => out.push_str(word),
            Inline::CamelCaseLink {
                word,
                escaped: false,
            } => out.push_str(&format!("[[{word}]]")),
        }
    }
}
