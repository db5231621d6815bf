//! Line handling shared by the block grammars

use crate::ast::{Block, Dialect};
use crate::error::ParseFailure;
use std::borrow::Cow;

/// Opening and closing fence for code blocks in both dialects
pub(crate) const CODE_FENCE: &str = "```";

/// Source split into lines, remembering whether it ended with a newline
#[derive(Debug)]
pub(crate) struct SourceLines<'a> {
    pub lines: Vec<&'a str>,
    pub trailing_newline: bool,
}

pub(crate) fn split_lines(text: &str) -> SourceLines<'_> {
    if text.is_empty() {
        return SourceLines {
            lines: Vec::new(),
            trailing_newline: false,
        };
    }
    let (body, trailing_newline) = match text.strip_suffix('\n') {
        Some(body) => (body, true),
        None => (text, false),
    };
    SourceLines {
        lines: body.split('\n').collect(),
        trailing_newline,
    }
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

pub(crate) fn is_code_fence(line: &str) -> bool {
    line.starts_with(CODE_FENCE)
}

/// Parse the fenced code block opening at `lines[start]`.
///
/// Returns the block and the index of the first line after the closing fence.
/// The body is kept byte for byte; inline rules never see it.
pub(crate) fn code_block(
    lines: &[&str],
    start: usize,
    dialect: Dialect,
) -> Result<(Block, usize), ParseFailure> {
    let info = lines[start][CODE_FENCE.len()..].to_string();
    let close = lines[start + 1..]
        .iter()
        .position(|line| line.trim_end() == CODE_FENCE)
        .ok_or_else(|| ParseFailure::unterminated(dialect, start + 1, "code block", CODE_FENCE))?;
    let end = start + 1 + close;
    let body = lines[start + 1..end].iter().map(|l| l.to_string()).collect();
    Ok((Block::CodeBlock { info, body }, end + 1))
}

/// Index one past the last line of the paragraph starting at `start`
pub(crate) fn paragraph_end(lines: &[&str], start: usize, starts_block: impl Fn(&str) -> bool) -> usize {
    let mut end = start + 1;
    while end < lines.len() && !is_blank(lines[end]) && !starts_block(lines[end]) {
        end += 1;
    }
    end
}

/// Byte offset where a backslash would stop `line` reading as a Markdown
/// list item: before a `-`/`+`/`*` marker, or before the dot of `N.`
pub(crate) fn list_marker_escape_point(line: &str) -> Option<usize> {
    let indent = line.len() - line.trim_start_matches(' ').len();
    let rest = &line[indent..];
    let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
    let (point, after) = if digits > 0 {
        (indent + digits, rest[digits..].strip_prefix('.')?)
    } else {
        let after = rest.strip_prefix(['-', '+', '*'])?;
        (indent, after)
    };
    after.starts_with(' ').then_some(point)
}

/// Escape a paragraph line that Markdown would otherwise read as a list item
pub(crate) fn escape_list_marker(line: &str) -> Cow<'_, str> {
    match list_marker_escape_point(line) {
        Some(point) => Cow::Owned(format!("{}\\{}", &line[..point], &line[point..])),
        None => Cow::Borrowed(line),
    }
}

/// Undo [`escape_list_marker`], unless the bare line would open a wikitext
/// list (`* item` at the margin)
pub(crate) fn unescape_list_marker(line: &str) -> Cow<'_, str> {
    let Some(slash) = line.find('\\') else {
        return Cow::Borrowed(line);
    };
    let bare = format!("{}{}", &line[..slash], &line[slash + 1..]);
    if list_marker_escape_point(&bare) == Some(slash) && !bare.starts_with('*') {
        Cow::Owned(bare)
    } else {
        Cow::Borrowed(line)
    }
}
