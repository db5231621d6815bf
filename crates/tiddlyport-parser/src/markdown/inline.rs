//! Markdown inline grammar
//!
//! Covers the CommonMark emphasis subset plus Obsidian extensions:
//! `**bold**`, `_italic_`/`*italic*`, `~~strike~~`, `` `code` ``,
//! `[[target|display]]`, `![[embed]]`, `[text](url)`, `![alt](url)` and
//! bare URLs. Markdown has no implicit links, so a bare CamelCase word is
//! recorded as an escaped (non-link) word.

use crate::ast::{Inline, InlineBuilder};
use crate::lexical::{
    at_word_end, at_word_start, autolink_len, bracketed, find_closing, is_camel_case, word_run,
};

/// Parse one paragraph-sized unit of Markdown
pub fn parse_inline(src: &str) -> Vec<Inline> {
    let mut out = InlineBuilder::default();
    let mut pos = 0;

    while pos < src.len() {
        if let Some((node, consumed)) = scan(src, pos) {
            out.push(node);
            pos += consumed;
            continue;
        }

        let rest = &src[pos..];
        let run = word_run(rest);
        let step = if !run.is_empty() {
            run.len()
        } else if is_escape(rest) {
            2
        } else {
            rest.chars().next().map_or(rest.len(), char::len_utf8)
        };
        out.push_text(&rest[..step]);
        pos += step;
    }

    out.finish()
}

/// Backslash before ASCII punctuation; both characters are kept as text
fn is_escape(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    bytes.len() > 1 && bytes[0] == b'\\' && bytes[1].is_ascii_punctuation()
}

fn scan(src: &str, pos: usize) -> Option<(Inline, usize)> {
    let rest = &src[pos..];
    match rest.as_bytes()[0] {
        b'`' => code_span(rest),
        b'*' if rest.starts_with("**") => emphasis(src, pos, "**", Inline::Bold),
        b'*' => emphasis(src, pos, "*", Inline::Italic),
        b'_' if rest.starts_with("__") && at_word_start(src, pos) => {
            emphasis(src, pos, "__", Inline::Bold)
        }
        b'_' if at_word_start(src, pos) => emphasis(src, pos, "_", Inline::Italic),
        b'~' if rest.starts_with("~~") => emphasis(src, pos, "~~", Inline::Strike),
        b'!' => image(rest),
        b'[' => link(rest),
        c if c.is_ascii_alphabetic() && at_word_start(src, pos) => bare_word(rest),
        _ => None,
    }
}

fn code_span(rest: &str) -> Option<(Inline, usize)> {
    let end = rest[1..].find('`')?;
    if end == 0 {
        return None;
    }
    Some((Inline::Code(rest[1..1 + end].to_string()), end + 2))
}

fn emphasis(
    src: &str,
    pos: usize,
    delim: &str,
    wrap: fn(Vec<Inline>) -> Inline,
) -> Option<(Inline, usize)> {
    let inner_start = pos + delim.len();
    if src[inner_start..]
        .chars()
        .next()
        .map_or(true, char::is_whitespace)
    {
        return None;
    }
    // underscores never open or close inside a word
    let underscore = delim.starts_with('_');
    let close = find_closing(src, inner_start, delim, |at| {
        let after = at + delim.len();
        at > inner_start
            && !src[..at].ends_with(char::is_whitespace)
            && (!underscore || at_word_end(src, after))
            && !(delim == "*" && (src[..at].ends_with('*') || src[after..].starts_with('*')))
    })?;
    let children = parse_inline(&src[inner_start..close]);
    Some((wrap(children), close + delim.len() - pos))
}

/// `[text](url)` at the start of `rest`: (text, url, length)
fn inline_link(rest: &str) -> Option<(&str, &str, usize)> {
    let body = rest.strip_prefix('[')?;
    let close = body.find(']')?;
    let after = body[close + 1..].strip_prefix('(')?;
    let end = after.find(')')?;
    let url = &after[..end];
    if url.is_empty() || url.contains(char::is_whitespace) || body[..close].contains('\n') {
        return None;
    }
    Some((&body[..close], url, 1 + close + 2 + end + 1))
}

fn image(rest: &str) -> Option<(Inline, usize)> {
    if let Some((inner, consumed)) = bracketed(rest, "![[", "]]") {
        let (target, display) = match inner.split_once('|') {
            Some((target, display)) => (target, Some(display.to_string())),
            None => (inner, None),
        };
        return Some((
            Inline::Image {
                target: target.to_string(),
                display,
            },
            consumed,
        ));
    }

    let (alt, url, consumed) = inline_link(&rest[1..])?;
    Some((
        Inline::Image {
            target: url.to_string(),
            display: (!alt.is_empty()).then(|| alt.to_string()),
        },
        consumed + 1,
    ))
}

fn link(rest: &str) -> Option<(Inline, usize)> {
    if let Some((inner, consumed)) = bracketed(rest, "[[", "]]") {
        let (target, display) = match inner.split_once('|') {
            Some((target, display)) => (target, Some(display.to_string())),
            None => (inner, None),
        };
        return Some((
            Inline::InternalLink {
                target: target.to_string(),
                display,
            },
            consumed,
        ));
    }

    let (text, url, consumed) = inline_link(rest)?;
    Some((
        Inline::ExternalLink {
            url: url.to_string(),
            display: text.to_string(),
        },
        consumed,
    ))
}

fn bare_word(rest: &str) -> Option<(Inline, usize)> {
    if let Some(len) = autolink_len(rest) {
        return Some((Inline::Autolink(rest[..len].to_string()), len));
    }
    let word = word_run(rest);
    is_camel_case(word).then(|| {
        (
            Inline::CamelCaseLink {
                word: word.to_string(),
                escaped: true,
            },
            word.len(),
        )
    })
}
