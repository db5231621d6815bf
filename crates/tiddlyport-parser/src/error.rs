//! Parser error types

use crate::ast::Dialect;
use std::str::Utf8Error;
use thiserror::Error;

/// Prefix of the sentinel text returned in place of a converted body
pub const FAILURE_PREFIX: &str = "failed to parse: ";

/// The block grammar could not consume the whole body.
///
/// Scoped to a single note: callers converting a batch record it and move on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{dialect} line {line}: {message}")]
pub struct ParseFailure {
    /// Dialect the body was parsed as
    pub dialect: Dialect,
    /// 1-based line where the failing construct starts
    pub line: usize,
    /// Human-readable diagnostic
    pub message: String,
}

impl ParseFailure {
    /// Create a failure at `line`
    pub fn new(dialect: Dialect, line: usize, message: impl Into<String>) -> Self {
        Self {
            dialect,
            line,
            message: message.into(),
        }
    }

    /// A fenced construct opened at `line` was never closed
    pub fn unterminated(dialect: Dialect, line: usize, construct: &str, fence: &str) -> Self {
        Self::new(
            dialect,
            line,
            format!("unterminated {construct}: expected closing `{fence}`"),
        )
    }

    /// Render as the sentinel string returned by the `convert_*` functions
    pub fn to_sentinel(&self) -> String {
        format!("{FAILURE_PREFIX}{self}")
    }
}

/// Parser error type
#[derive(Debug, Error)]
pub enum ParserError {
    /// Grammar could not consume the body
    #[error("Parsing failed: {0}")]
    ParseFailed(#[from] ParseFailure),

    /// Input bytes are not valid UTF-8
    #[error("Invalid UTF-8 encoding: {0}")]
    Encoding(#[from] Utf8Error),
}

/// Specialized Result type for parser operations
pub type ParserResult<T> = Result<T, ParserError>;

impl ParserError {
    /// Check if this error is scoped to the note's content (the batch can continue)
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::ParseFailed(_))
    }

    /// The underlying grammar failure, if any
    pub fn as_parse_failure(&self) -> Option<&ParseFailure> {
        match self {
            Self::ParseFailed(failure) => Some(failure),
            Self::Encoding(_) => None,
        }
    }
}

/// Check whether converted text is the failure sentinel
pub fn is_failure_sentinel(text: &str) -> bool {
    text.starts_with(FAILURE_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display() {
        let failure = ParseFailure::unterminated(Dialect::Wikitext, 3, "code block", "```");
        assert_eq!(
            failure.to_string(),
            "wikitext line 3: unterminated code block: expected closing `````"
        );
        assert!(is_failure_sentinel(&failure.to_sentinel()));
    }

    #[test]
    fn test_error_classification() {
        let err = ParserError::from(ParseFailure::new(Dialect::Markdown, 1, "boom"));
        assert!(err.is_recoverable());
        assert_eq!(err.as_parse_failure().map(|f| f.line), Some(1));

        let bytes = vec![0xff, 0xfe];
        let utf8 = std::str::from_utf8(&bytes).unwrap_err();
        let err = ParserError::from(utf8);
        assert!(!err.is_recoverable());
        assert!(err.as_parse_failure().is_none());
    }
}
