//! Wikitext block grammar
//!
//! - Headings: `!` repeated once per level, a space, then text
//! - Lists: `*` (bullet) or `#` (numbered) repeated once per nesting level
//! - Block quotes: lines between `<<<` fences, or `>`-prefixed lines. The
//!   closing fence may carry a citation (`<<< Author`)
//! - Code: `` ``` `` fences, body untouched
//! - Paragraphs: runs of other non-blank lines

use super::inline::parse_inline;
use crate::ast::{Block, Dialect, Document, ListKind, QuoteStyle};
use crate::error::ParseFailure;
use crate::lines::{code_block, is_blank, is_code_fence, paragraph_end, split_lines};
use regex::Regex;
use std::sync::LazyLock;

/// Opening and closing fence of a multi-line block quote
pub const QUOTE_FENCE: &str = "<<<";

static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(!+) (.*)$").expect("heading regex"));

static LIST_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([*#]+) (.*)$").expect("list regex"));

/// Parse a whole wikitext body
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
            let (block, next) = code_block(lines, i, Dialect::Wikitext)?;
            blocks.push(block);
            i = next;
        } else if is_quote_fence(line) {
            let (block, next) = fenced_quote(lines, i)?;
            blocks.push(block);
            i = next;
        } else if line.starts_with('>') {
            let end = lines[i..]
                .iter()
                .position(|l| !l.starts_with('>'))
                .map_or(lines.len(), |offset| i + offset);
            let quoted = lines[i..end]
                .iter()
                .map(|l| {
                    let body = &l[1..];
                    parse_inline(body.strip_prefix(' ').unwrap_or(body))
                })
                .collect();
            blocks.push(Block::BlockQuote {
                style: QuoteStyle::Prefixed,
                lines: quoted,
                citation: None,
            });
            i = end;
        } else if let Some(block) = heading(line).or_else(|| list_item(line)) {
            blocks.push(block);
            i += 1;
        } else {
            let end = paragraph_end(lines, i, starts_block);
            blocks.push(Block::Paragraph {
                content: parse_inline(&lines[i..end].join("\n")),
            });
            i = end;
        }
    }

    Ok(Document {
        blocks,
        trailing_newline: source.trailing_newline,
    })
}

fn is_quote_fence(line: &str) -> bool {
    line.trim_end() == QUOTE_FENCE
}

/// Text after a closing fence, when the line is one
fn closing_fence(line: &str) -> Option<&str> {
    line.strip_prefix(QUOTE_FENCE)
        .filter(|rest| !rest.starts_with('<'))
        .map(str::trim)
}

fn starts_block(line: &str) -> bool {
    is_code_fence(line)
        || is_quote_fence(line)
        || line.starts_with('>')
        || HEADING_REGEX.is_match(line)
        || LIST_REGEX.is_match(line)
}

fn fenced_quote(lines: &[&str], start: usize) -> Result<(Block, usize), ParseFailure> {
    let close = lines[start + 1..]
        .iter()
        .position(|line| closing_fence(line).is_some())
        .ok_or_else(|| {
            ParseFailure::unterminated(Dialect::Wikitext, start + 1, "block quote", QUOTE_FENCE)
        })?;
    let end = start + 1 + close;
    let quoted = lines[start + 1..end]
        .iter()
        .map(|line| parse_inline(line))
        .collect();
    let citation = closing_fence(lines[end])
        .filter(|cite| !cite.is_empty())
        .map(parse_inline);
    Ok((
        Block::BlockQuote {
            style: QuoteStyle::Fenced,
            lines: quoted,
            citation,
        },
        end + 1,
    ))
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
    let markers = &caps[1];
    // mixed runs like `*#` take their kind from the innermost marker
    let kind = match markers.chars().last() {
        Some('#') => ListKind::Numbered,
        _ => ListKind::Bullet,
    };
    Some(Block::ListItem {
        kind,
        depth: markers.len(),
        content: parse_inline(&caps[2]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::Inline;

    fn text(s: &str) -> Vec<Inline> {
        vec![Inline::text(s)]
    }

    #[test]
    fn test_headings() {
        let doc = parse_blocks("! One\n!!! Three").unwrap();
        assert_eq!(
            doc.blocks,
            vec![
                Block::Heading {
                    depth: 1,
                    content: text("One")
                },
                Block::Heading {
                    depth: 3,
                    content: text("Three")
                },
            ]
        );
        assert!(!doc.trailing_newline);
    }

    #[test]
    fn test_marker_without_space_is_paragraph() {
        let doc = parse_blocks("!important\n*star").unwrap();
        assert_eq!(
            doc.blocks,
            vec![Block::Paragraph {
                content: text("!important\n*star")
            }]
        );
    }

    #[test]
    fn test_list_depth_from_marker_repetition() {
        let doc = parse_blocks("* a\n** b\n### c").unwrap();
        assert_eq!(
            doc.blocks,
            vec![
                Block::ListItem {
                    kind: ListKind::Bullet,
                    depth: 1,
                    content: text("a")
                },
                Block::ListItem {
                    kind: ListKind::Bullet,
                    depth: 2,
                    content: text("b")
                },
                Block::ListItem {
                    kind: ListKind::Numbered,
                    depth: 3,
                    content: text("c")
                },
            ]
        );
    }

    #[test]
    fn test_paragraph_stops_at_list() {
        let doc = parse_blocks("A numbered list:\n# First").unwrap();
        assert_eq!(doc.blocks.len(), 2);
        assert!(matches!(doc.blocks[0], Block::Paragraph { .. }));
        assert!(matches!(doc.blocks[1], Block::ListItem { .. }));
    }

    #[test]
    fn test_multi_line_paragraph_is_one_unit() {
        let doc = parse_blocks("line one\nline two\n\nnext").unwrap();
        assert_eq!(
            doc.blocks,
            vec![
                Block::Paragraph {
                    content: text("line one\nline two")
                },
                Block::Blank(String::new()),
                Block::Paragraph {
                    content: text("next")
                },
            ]
        );
    }

    #[test]
    fn test_fenced_quote() {
        let doc = parse_blocks("<<<\nfirst\n\nthird\n<<<\n").unwrap();
        assert_eq!(
            doc.blocks,
            vec![Block::BlockQuote {
                style: QuoteStyle::Fenced,
                lines: vec![text("first"), vec![], text("third")],
                citation: None,
            }]
        );
        assert!(doc.trailing_newline);
    }

    #[test]
    fn test_prefixed_quote() {
        let doc = parse_blocks("> one\n>two\nafter").unwrap();
        assert_eq!(
            doc.blocks[0],
            Block::BlockQuote {
                style: QuoteStyle::Prefixed,
                lines: vec![text("one"), text("two")],
                citation: None,
            }
        );
        assert_eq!(doc.blocks.len(), 2);
    }

    #[test]
    fn test_citation_closes_quote() {
        let doc = parse_blocks("<<<\nA quoted line\n<<< Someone Famous\n\nAfter the quote").unwrap();
        assert_eq!(
            doc.blocks,
            vec![
                Block::BlockQuote {
                    style: QuoteStyle::Fenced,
                    lines: vec![text("A quoted line")],
                    citation: Some(text("Someone Famous")),
                },
                Block::Blank(String::new()),
                Block::Paragraph {
                    content: text("After the quote")
                },
            ]
        );
    }

    #[test]
    fn test_cited_line_does_not_open_quote() {
        let doc = parse_blocks("<<< not a fence\ntext").unwrap();
        assert!(matches!(doc.blocks[0], Block::Paragraph { .. }));
    }

    #[test]
    fn test_unterminated_quote_fails() {
        let failure = parse_blocks("intro\n<<<\nquoted").unwrap_err();
        assert_eq!(failure.dialect, Dialect::Wikitext);
        assert_eq!(failure.line, 2);
    }
}
