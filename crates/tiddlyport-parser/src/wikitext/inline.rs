//! Wikitext inline grammar
//!
//! Recognizes `''bold''`, `//italic//`, `~~strike~~`, `` `code` ``,
//! `[[links]]`, `[ext[external links]]`, `[img[images]]`, bare URLs and
//! CamelCase words (`~` in front suppresses the link). Anything else is text.

use crate::ast::{Inline, InlineBuilder};
use crate::lexical::{
    at_word_start, autolink_len, bracketed, find_closing, is_camel_case, word_run,
};

/// Parse one paragraph-sized unit of wikitext
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
        let step = if run.is_empty() {
            rest.chars().next().map_or(rest.len(), char::len_utf8)
        } else {
            run.len()
        };
        out.push_text(&rest[..step]);
        pos += step;
    }

    out.finish()
}

fn scan(src: &str, pos: usize) -> Option<(Inline, usize)> {
    let rest = &src[pos..];
    match rest.as_bytes()[0] {
        b'`' => code_span(rest),
        b'\'' if rest.starts_with("''") => delimited(src, pos, "''", Inline::Bold),
        b'/' if rest.starts_with("//") => delimited(src, pos, "//", Inline::Italic),
        b'~' if rest.starts_with("~~") => delimited(src, pos, "~~", Inline::Strike),
        b'~' => escaped_camel_case(src, pos),
        b'[' => bracket_link(rest),
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

fn delimited(
    src: &str,
    pos: usize,
    delim: &str,
    wrap: fn(Vec<Inline>) -> Inline,
) -> Option<(Inline, usize)> {
    let inner_start = pos + delim.len();
    // `//` after a scheme colon belongs to a URL, not to emphasis
    let close = find_closing(src, inner_start, delim, |at| {
        at > inner_start && !(delim == "//" && src[..at].ends_with(':'))
    })?;
    let children = parse_inline(&src[inner_start..close]);
    Some((wrap(children), close + delim.len() - pos))
}

fn escaped_camel_case(src: &str, pos: usize) -> Option<(Inline, usize)> {
    let word = word_run(&src[pos + 1..]);
    if !at_word_start(src, pos) || !is_camel_case(word) {
        return None;
    }
    Some((
        Inline::CamelCaseLink {
            word: word.to_string(),
            escaped: true,
        },
        1 + word.len(),
    ))
}

fn bracket_link(rest: &str) -> Option<(Inline, usize)> {
    if let Some((inner, consumed)) = bracketed(rest, "[img[", "]]") {
        let image = match inner.split_once('|') {
            Some((display, target)) => Inline::Image {
                target: target.to_string(),
                display: Some(display.to_string()),
            },
            None => Inline::Image {
                target: inner.to_string(),
                display: None,
            },
        };
        return Some((image, consumed));
    }

    if let Some((inner, consumed)) = bracketed(rest, "[ext[", "]]") {
        let (display, url) = inner.split_once('|').unwrap_or(("", inner));
        return Some((
            Inline::ExternalLink {
                url: url.to_string(),
                display: display.to_string(),
            },
            consumed,
        ));
    }

    let (inner, consumed) = bracketed(rest, "[[", "]]")?;
    let link = match inner.split_once('|') {
        Some((display, target)) => Inline::InternalLink {
            target: target.to_string(),
            display: Some(display.to_string()),
        },
        None => Inline::InternalLink {
            target: inner.to_string(),
            display: None,
        },
    };
    Some((link, consumed))
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
                escaped: false,
            },
            word.len(),
        )
    })
}
