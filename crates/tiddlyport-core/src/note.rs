//! Tiddler record and the helpers that derive names from it

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Format of TiddlyWiki `created`/`modified` fields: `YYYYMMDDHHMMSSmmm` in UTC
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S%3f";

static TAG_TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]|(\S+)").expect("tag token regex"));

/// A single note as TiddlyWiki stores it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tiddler {
    pub title: String,

    /// Body in the note's source dialect
    #[serde(default)]
    pub text: String,

    /// Space-separated tag field; `[[multi word]]` is one tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,

    #[serde(default)]
    pub created: String,

    #[serde(default)]
    pub modified: String,
}

impl Tiddler {
    /// Create a tiddler stamped with the current time
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        let now = tiddlywiki_timestamp(Utc::now());
        Self {
            title: title.into(),
            text: text.into(),
            tags: None,
            created: now.clone(),
            modified: now,
        }
    }

    /// Set the tag field from a list, dropping it when the list is empty
    pub fn with_tags(mut self, tags: &[String]) -> Self {
        self.tags = (!tags.is_empty()).then(|| format_tags(tags));
        self
    }

    /// Tags in field order
    pub fn tag_list(&self) -> Vec<String> {
        self.tags.as_deref().map(parse_tags).unwrap_or_default()
    }

    /// File name of this note when written as Markdown
    pub fn file_name(&self) -> String {
        note_file_name(&self.title)
    }
}

/// Split a TiddlyWiki tag field into tags
pub fn parse_tags(field: &str) -> Vec<String> {
    TAG_TOKEN_REGEX
        .captures_iter(field)
        .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Join tags into a TiddlyWiki tag field
pub fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| {
            if tag.contains(char::is_whitespace) {
                format!("[[{tag}]]")
            } else {
                tag.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A title with the characters that cannot appear in a path segment removed.
///
/// A result that is empty or only dots (`.`, `..`) would name the current or
/// parent directory, so each of its characters becomes `_`.
pub fn sanitize_segment(title: &str) -> String {
    let segment: String = title
        .chars()
        .filter(|c| !matches!(c, '/' | ':' | '\\'))
        .collect();
    if segment.chars().all(|c| c == '.') {
        "_".repeat(segment.len().max(1))
    } else {
        segment
    }
}

/// `<title>.md`, sanitised
pub fn note_file_name(title: &str) -> String {
    format!("{}.md", sanitize_segment(title))
}

/// Render `at` in TiddlyWiki's timestamp format
pub fn tiddlywiki_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
