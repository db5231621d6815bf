//! Markdown block grammar
//!
//! Nesting depth of list items comes from the indent width: 2 spaces per
//! level for bullets, 3 for numbered items (the width of `"1. "`).
//! A paragraph line whose marker is backslash-escaped (`\- x`, `1\. x`)
//! stays a paragraph, and the escape is dropped.

use super::inline::parse_inline;
use crate::ast::{Block, Dialect, Document, ListKind, QuoteStyle, CITATION_DASH};
use crate::error::ParseFailure;
use crate::lines::{
    code_block, is_blank, is_code_fence, paragraph_end, split_lines, unescape_list_marker,
};
use regex::Regex;
use std::sync::LazyLock;

static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#+) (.*)$").expect("heading regex"));

static LIST_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^( *)([-*+]|[0-9]+\.) (.*)$").expect("list regex")
});

/// Parse a whole Markdown body
pub fn parse_blocks(text: &str) -> Result<Document, ParseFailure> {
    let source = split_lines(text);
    let lines = source.lines.as_slice();
    let mut blocks = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        if is_blank(line) {
            blocks.push(Block::Blank(line.to_string()));
            i += 1;
        } else if is_code_fence(line) {
            let (block, next) = code_block(lines, i, Dialect::Markdown)?;
            blocks.push(block);
            i = next;
        } else if line.starts_with('>') {
            let end = lines[i..]
                .iter()
                .position(|l| !l.starts_with('>'))
                .map_or(lines.len(), |offset| i + offset);
            blocks.push(quote(&lines[i..end]));
            i = end;
        } else if let Some(block) = heading(line).or_else(|| list_item(line)) {
            blocks.push(block);
            i += 1;
        } else {
            let end = paragraph_end(lines, i, starts_block);
            let text = lines[i..end]
                .iter()
                .map(|l| unescape_list_marker(l))
                .collect::<Vec<_>>()
                .join("\n");
            blocks.push(Block::Paragraph {
                content: parse_inline(&text),
            });
            i = end;
        }
    }

    Ok(Document {
        blocks,
        trailing_newline: source.trailing_newline,
    })
}

fn starts_block(line: &str) -> bool {
    is_code_fence(line)
        || line.starts_with('>')
        || HEADING_REGEX.is_match(line)
        || LIST_REGEX.is_match(line)
}

fn quote_body(line: &str) -> &str {
    let body = &line[1..];
    body.strip_prefix(' ').unwrap_or(body)
}

/// A run of `>` lines; a last line led by the citation dash is the attribution
fn quote(run: &[&str]) -> Block {
    let (body, citation) = match run.split_last() {
        Some((last, rest)) => match quote_body(last).strip_prefix(CITATION_DASH) {
            Some(cite) if cite.starts_with(' ') => (rest, Some(parse_inline(cite.trim()))),
            _ => (run, None),
        },
        None => (run, None),
    };
    Block::BlockQuote {
        style: QuoteStyle::Prefixed,
        lines: body.iter().map(|l| parse_inline(quote_body(l))).collect(),
        citation,
    }
}

fn heading(line: &str) -> Option<Block> {
    let caps = HEADING_REGEX.captures(line)?;
    Some(Block::Heading {
        depth: caps[1].len(),
        content: parse_inline(&caps[2]),
    })
}

fn list_item(line: &str) -> Option<Block> {
    let caps = LIST_REGEX.captures(line)?;
    let indent = caps[1].len();
    let kind = if caps[2].ends_with('.') {
        ListKind::Numbered
    } else {
        ListKind::Bullet
    };
    Some(Block::ListItem {
        kind,
        depth: indent / kind.markdown_indent_step() + 1,
        content: parse_inline(&caps[3]),
    })
}
