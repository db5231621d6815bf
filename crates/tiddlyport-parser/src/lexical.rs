//! Lexical helpers shared by both inline grammars

use regex::Regex;
use std::sync::LazyLock;

/// Marker that makes a link target a URL
pub const URL_SCHEME_MARKER: &str = "://";

static CAMEL_CASE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][a-z]+[A-Z][A-Za-z0-9]*$").expect("camel case regex"));

static URL_SCHEME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^[A-Za-z][A-Za-z0-9+.\-]*://[^\s<>"`]"#).expect("url scheme regex")
});

/// Whether a link target points outside the note collection
pub fn is_url(target: &str) -> bool {
    target.contains(URL_SCHEME_MARKER)
}

/// Whether `word` is an implicit CamelCase link (`HelloThere`, `TiddlyWiki5`)
pub fn is_camel_case(word: &str) -> bool {
    CAMEL_CASE_REGEX.is_match(word)
}

/// Leading run of ASCII alphanumerics
pub(crate) fn word_run(s: &str) -> &str {
    let end = s
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(s.len());
    &s[..end]
}

/// True when the character before `pos` does not continue a word
pub(crate) fn at_word_start(src: &str, pos: usize) -> bool {
    src[..pos]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric())
}

/// True when the character at `pos` does not continue a word
pub(crate) fn at_word_end(src: &str, pos: usize) -> bool {
    src[pos..]
        .chars()
        .next()
        .map_or(true, |c| !c.is_alphanumeric())
}

/// Length of a bare URL at the start of `rest`.
///
/// The URL runs to the next whitespace or angle bracket; trailing sentence
/// punctuation is left out.
pub(crate) fn autolink_len(rest: &str) -> Option<usize> {
    if !URL_SCHEME_REGEX.is_match(rest) {
        return None;
    }
    let end = rest
        .find(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '"' | '`'))
        .unwrap_or(rest.len());
    let url = rest[..end].trim_end_matches(['.', ',', ';', ':', '!', '?', ')', '\'']);
    let scheme_end = url.find(URL_SCHEME_MARKER)? + URL_SCHEME_MARKER.len();
    (url.len() > scheme_end).then_some(url.len())
}

/// Byte offset of the first `delim` at or after `from` that `accept` allows
pub(crate) fn find_closing(
    src: &str,
    from: usize,
    delim: &str,
    accept: impl Fn(usize) -> bool,
) -> Option<usize> {
    let mut search = from;
    while let Some(found) = src[search..].find(delim) {
        let at = search + found;
        if accept(at) {
            return Some(at);
        }
        // delimiters are ASCII, so the next byte is a char boundary
        search = at + 1;
    }
    None
}

/// Inner text of `open ... close` at the start of `rest`, with the total length.
///
/// The inner text must be non-empty and stay on one line.
pub(crate) fn bracketed<'a>(rest: &'a str, open: &str, close: &str) -> Option<(&'a str, usize)> {
    let body = rest.strip_prefix(open)?;
    let end = body.find(close)?;
    let inner = &body[..end];
    if inner.is_empty() || inner.contains('\n') {
        return None;
    }
    Some((inner, open.len() + end + close.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("HelloThere", true ; "two segments")]
    #[test_case("TiddlyWiki5", true ; "trailing digit")]
    #[test_case("McDonald", true ; "short first segment")]
    #[test_case("Hello", false ; "single segment")]
    #[test_case("HTML", false ; "all caps")]
    #[test_case("helloThere", false ; "lowercase initial")]
    #[test_case("Hello2World", false ; "digit between segments")]
    fn test_is_camel_case(word: &str, expected: bool) {
        assert_eq!(is_camel_case(word), expected);
    }

    #[test]
    fn test_autolink_len() {
        assert_eq!(autolink_len("https://tiddlywiki.com/ and"), Some(23));
        assert_eq!(autolink_len("https://x.org."), Some(13));
        assert_eq!(autolink_len("https:// nothing"), None);
        assert_eq!(autolink_len("plain words"), None);
    }

    #[test]
    fn test_word_boundaries() {
        let src = "a HelloThere";
        assert!(at_word_start(src, 2));
        assert!(!at_word_start(src, 3));
        assert!(at_word_end(src, src.len()));
        assert_eq!(word_run(&src[2..]), "HelloThere");
    }

    #[test]
    fn test_find_closing_skips_rejected() {
        let src = "x https://a b// c";
        let close = find_closing(src, 0, "//", |at| !src[..at].ends_with(':'));
        assert_eq!(close, Some(13));
    }

    #[test]
    fn test_bracketed() {
        assert_eq!(bracketed("[[Note]] rest", "[[", "]]"), Some(("Note", 8)));
        assert_eq!(bracketed("[[]]", "[[", "]]"), None);
        assert_eq!(bracketed("[[a\nb]]", "[[", "]]"), None);
        assert_eq!(bracketed("[img[a.png]]", "[img[", "]]"), Some(("a.png", 12)));
    }

    #[test]
    fn test_is_url() {
        assert!(is_url("https://help.obsidian.md/Linking+notes"));
        assert!(!is_url("How to build a funnel 20/80"));
    }
}
