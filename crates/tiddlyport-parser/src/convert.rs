//! Per-note conversion entry points
//!
//! Each call is independent: a body that fails to parse yields a value
//! scoped to that note, so batch callers can carry on with the rest.

use crate::ast::{Dialect, Document};
use crate::error::{ParseFailure, ParserResult};
use crate::grammar::Grammar;
use crate::markdown::MarkdownGrammar;
use crate::transform::{MarkdownWriter, Writer, WikitextWriter};
use crate::wikitext::WikitextGrammar;

static WIKITEXT_GRAMMAR: WikitextGrammar = WikitextGrammar;
static MARKDOWN_GRAMMAR: MarkdownGrammar = MarkdownGrammar;
static WIKITEXT_WRITER: WikitextWriter = WikitextWriter;
static MARKDOWN_WRITER: MarkdownWriter = MarkdownWriter;

/// Grammar that reads `dialect`
pub fn grammar(dialect: Dialect) -> &'static dyn Grammar {
    match dialect {
        Dialect::Wikitext => &WIKITEXT_GRAMMAR,
        Dialect::Markdown => &MARKDOWN_GRAMMAR,
    }
}

/// Writer that emits `dialect`
pub fn writer(dialect: Dialect) -> &'static dyn Writer {
    match dialect {
        Dialect::Wikitext => &WIKITEXT_WRITER,
        Dialect::Markdown => &MARKDOWN_WRITER,
    }
}

/// Parse `text` as `dialect`
pub fn parse(text: &str, dialect: Dialect) -> Result<Document, ParseFailure> {
    grammar(dialect).parse(text)
}

/// Emit `doc` as `dialect`
pub fn render(doc: &Document, dialect: Dialect) -> String {
    writer(dialect).render(doc)
}

/// Convert `text` from `from` into the other dialect
pub fn try_convert(text: &str, from: Dialect) -> Result<String, ParseFailure> {
    let doc = parse(text, from)?;
    Ok(render(&doc, from.other()))
}

/// Convert `text` from `from`, returning the failure sentinel on a parse failure
pub fn convert(text: &str, from: Dialect) -> String {
    try_convert(text, from).unwrap_or_else(|failure| failure.to_sentinel())
}

/// Convert raw bytes, rejecting invalid UTF-8
pub fn convert_bytes(bytes: &[u8], from: Dialect) -> ParserResult<String> {
    let text = std::str::from_utf8(bytes)?;
    Ok(try_convert(text, from)?)
}

/// Wikitext → Markdown; failure sentinel on a malformed body
pub fn convert_to_markdown(wikitext: &str) -> String {
    convert(wikitext, Dialect::Wikitext)
}

/// Markdown → wikitext; failure sentinel on a malformed body
pub fn convert_to_wikitext(markdown: &str) -> String {
    convert(markdown, Dialect::Markdown)
}

/// Wikitext → Markdown
pub fn try_convert_to_markdown(wikitext: &str) -> ParserResult<String> {
    Ok(try_convert(wikitext, Dialect::Wikitext)?)
}

/// Markdown → wikitext
pub fn try_convert_to_wikitext(markdown: &str) -> ParserResult<String> {
    Ok(try_convert(markdown, Dialect::Markdown)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::is_failure_sentinel;

    #[test]
    fn test_dispatch_matches_dialect() {
        for dialect in [Dialect::Wikitext, Dialect::Markdown] {
            assert_eq!(grammar(dialect).dialect(), dialect);
            assert_eq!(writer(dialect).dialect(), dialect);
        }
    }

    #[test]
    fn test_convert_returns_sentinel() {
        let out = convert_to_markdown("```\nnever closed");
        assert!(is_failure_sentinel(&out));
        assert_eq!(
            out,
            "failed to parse: wikitext line 1: unterminated code block: expected closing `````"
        );
    }

    #[test]
    fn test_try_convert_reports_failure() {
        let err = try_convert_to_wikitext("text\n```").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(err.as_parse_failure().map(|f| f.line), Some(2));
    }

    #[test]
    fn test_convert_bytes_rejects_bad_utf8() {
        let err = convert_bytes(&[b'a', 0xff], Dialect::Markdown).unwrap_err();
        assert!(!err.is_recoverable());
        assert_eq!(
            convert_bytes(b"! Title", Dialect::Wikitext).unwrap(),
            "# Title"
        );
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(convert_to_markdown(""), "");
        assert_eq!(convert_to_wikitext("\n"), "\n");
    }
}
