//! Markdown notes → tiddlers

use crate::error::CoreResult;
use crate::note::{parse_tags, Tiddler};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use tiddlyport_parser::{try_convert, Dialect};
use tracing::warn;

static INLINE_TAG_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s)#([\w-]+)").expect("inline tag regex"));

static TAGS_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^tags:[ \t]*(.*?)[ \t]*$").expect("tags line regex"));

const FRONT_MATTER_FENCE: &str = "---";

const CODE_FENCE: &str = "```";

/// Knobs for [`import_markdown_with`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportOptions {
    /// Turn `#tag` tokens in the body into tags
    pub extract_inline_tags: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            extract_inline_tags: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FrontMatter {
    #[serde(default)]
    tags: Option<TagsField>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TagsField {
    Line(String),
    List(Vec<serde_yaml::Value>),
}

fn scalar_tag(value: serde_yaml::Value) -> Option<String> {
    match value {
        serde_yaml::Value::String(s) => Some(s),
        serde_yaml::Value::Number(n) => Some(n.to_string()),
        serde_yaml::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// A one-line TiddlyWiki tag field, as export writes it. Quoted strings and
/// `[a, b]` flow lists are left to YAML; `[[multi word]]` is not a flow list.
fn tag_field_line(block: &str) -> Option<&str> {
    let value = TAGS_LINE_REGEX.captures(block)?.get(1)?.as_str();
    let yaml_only = value.is_empty()
        || value.starts_with(['"', '\''])
        || (value.starts_with('[') && !value.starts_with("[["));
    (!yaml_only).then_some(value)
}

/// Split a leading `---` block from the body.
///
/// Returns the block's inner text (without fences) and the rest. Content
/// without a closed block comes back whole.
pub fn split_front_matter(content: &str) -> (Option<&str>, &str) {
    let Some(rest) = content.strip_prefix("---\n") else {
        return (None, content);
    };
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FRONT_MATTER_FENCE {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }
    (None, content)
}

/// Tags listed in a front matter block.
///
/// A `tags:` line is read as a TiddlyWiki tag field (`[[multi word]] other`).
/// Anything else goes through YAML: a quoted string, or a list.
pub fn front_matter_tags(block: &str) -> CoreResult<Vec<String>> {
    if block.trim().is_empty() {
        return Ok(Vec::new());
    }
    if let Some(field) = tag_field_line(block) {
        return Ok(parse_tags(field));
    }
    let front: FrontMatter = serde_yaml::from_str(block)?;
    Ok(match front.tags {
        Some(TagsField::Line(line)) => parse_tags(&line),
        Some(TagsField::List(list)) => list.into_iter().filter_map(scalar_tag).collect(),
        None => Vec::new(),
    })
}

/// Pull `#tag` tokens out of `text`.
///
/// Returns the distinct tags in first-seen order and the text with the
/// tokens removed, trimmed. Fenced code blocks and inline code spans are
/// left alone.
pub fn extract_inline_tags(text: &str) -> (Vec<String>, String) {
    let mut tags: Vec<String> = Vec::new();
    let mut out = String::with_capacity(text.len());
    let mut in_fence = false;

    for line in text.split_inclusive('\n') {
        let fence = if in_fence {
            line.trim_end() == CODE_FENCE
        } else {
            line.starts_with(CODE_FENCE)
        };
        if fence || in_fence {
            in_fence ^= fence;
            out.push_str(line);
            continue;
        }

        // odd segments sit between backticks
        for (i, segment) in line.split('`').enumerate() {
            if i > 0 {
                out.push('`');
            }
            if i % 2 == 1 {
                out.push_str(segment);
            } else {
                out.push_str(&strip_tags(segment, i == 0, &mut tags));
            }
        }
    }
    (tags, out.trim().to_string())
}

fn strip_tags(segment: &str, line_start: bool, tags: &mut Vec<String>) -> String {
    INLINE_TAG_REGEX
        .replace_all(segment, |caps: &regex::Captures| {
            // `^` after a code span is not the start of the line
            let glued = caps[1].is_empty() && !line_start;
            if glued {
                return caps[0].to_string();
            }
            let tag = &caps[2];
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
            caps[1].to_string()
        })
        .into_owned()
}

/// Import one Markdown note with default options
pub fn import_markdown(content: &str, file_name: &str) -> Tiddler {
    import_markdown_with(content, file_name, &ImportOptions::default())
}

/// Import one Markdown note.
///
/// The title is the file name without `.md`. Tags come from the front matter
/// and then from inline `#tag` tokens. A body that fails to parse becomes the
/// failure sentinel, so a batch import carries on.
pub fn import_markdown_with(content: &str, file_name: &str, options: &ImportOptions) -> Tiddler {
    let title = file_name.strip_suffix(".md").unwrap_or(file_name);
    let (front, body) = split_front_matter(content);

    let mut tags = match front.map(front_matter_tags).transpose() {
        Ok(tags) => tags.unwrap_or_default(),
        Err(err) => {
            warn!(title, %err, "ignoring unreadable front matter");
            Vec::new()
        }
    };

    let body = if options.extract_inline_tags {
        let (inline, stripped) = extract_inline_tags(body);
        for tag in inline {
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        stripped
    } else {
        body.trim().to_string()
    };

    let text = try_convert(&body, Dialect::Markdown).unwrap_or_else(|failure| {
        warn!(title, %failure, "note body did not parse");
        failure.to_sentinel()
    });

    Tiddler::new(title, text).with_tags(&tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_front_matter() {
        assert_eq!(
            split_front_matter("---\ntags: a\n---\nbody"),
            (Some("tags: a\n"), "body")
        );
        assert_eq!(split_front_matter("---\n---\nbody"), (Some(""), "body"));
        assert_eq!(split_front_matter("---\nnever closed"), (None, "---\nnever closed"));
        assert_eq!(split_front_matter("plain"), (None, "plain"));
    }

    #[test]
    fn test_front_matter_tag_forms() {
        assert_eq!(front_matter_tags("tags: Root Obsidian\n").unwrap(), vec!["Root", "Obsidian"]);
        assert_eq!(front_matter_tags("tags:\n  - Plugin Development\n  - x\n").unwrap(), vec!["Plugin Development", "x"]);
        assert!(front_matter_tags("title: only\n").unwrap().is_empty());
        assert!(front_matter_tags("tags: [unclosed\n").is_err());
    }

    #[test]
    fn test_tag_field_line_survives_yaml_syntax() {
        assert_eq!(
            front_matter_tags("tags: [[Plugin Development]] Typescript\n").unwrap(),
            vec!["Plugin Development", "Typescript"]
        );
        assert_eq!(front_matter_tags("tags: [[Solo Tag]]\n").unwrap(), vec!["Solo Tag"]);
        assert_eq!(front_matter_tags("tags: 2024\n").unwrap(), vec!["2024"]);
        assert_eq!(front_matter_tags("tags: [a, b]\n").unwrap(), vec!["a", "b"]);
        assert_eq!(front_matter_tags("tags: \"two words\"\n").unwrap(), vec!["two", "words"]);
        assert_eq!(front_matter_tags("tags:\n  - 2024\n  - x\n").unwrap(), vec!["2024", "x"]);
    }

    #[test]
    fn test_import_keeps_multi_word_and_numeric_tags() {
        let tiddler = import_markdown("---\ntags: [[Plugin Development]] 2024\n---\nbody", "n.md");
        assert_eq!(tiddler.tags.as_deref(), Some("[[Plugin Development]] 2024"));
        assert_eq!(tiddler.text, "body");
    }

    #[test]
    fn test_code_is_not_searched_for_tags() {
        let (tags, text) =
            extract_inline_tags("```c\n#include <stdio.h>\n```\nUse `#define` and #real\n");
        assert_eq!(tags, vec!["real"]);
        assert_eq!(text, "```c\n#include <stdio.h>\n```\nUse `#define` and");
    }

    #[test]
    fn test_tag_glued_to_code_span_is_kept() {
        let (tags, text) = extract_inline_tags("`x`#nope and `y` #yes");
        assert_eq!(tags, vec!["yes"]);
        assert_eq!(text, "`x`#nope and `y`");
    }

    #[test]
    fn test_code_block_imports_untouched() {
        let tiddler = import_markdown("```c\n#include <stdio.h>\n```\n", "c.md");
        assert_eq!(tiddler.tags, None);
        assert_eq!(tiddler.text, "```c\n#include <stdio.h>\n```");
    }

    #[test]
    fn test_extract_inline_tags() {
        let (tags, text) = extract_inline_tags("#start some text #tag-one and #tag-one\nplus #two_x. not#this");
        assert_eq!(tags, vec!["start", "tag-one", "two_x"]);
        assert_eq!(text, "some text  and \nplus . not#this");
    }

    #[test]
    fn test_heading_is_not_a_tag() {
        let (tags, text) = extract_inline_tags("# Heading\n## Sub");
        assert!(tags.is_empty());
        assert_eq!(text, "# Heading\n## Sub");
    }

    #[test]
    fn test_import_markdown() {
        let content = "---\ntags: Obsidian\n---\n# Title\n\nSee [[Other|shown]] #draft\n";
        let tiddler = import_markdown(content, "My Note.md");

        assert_eq!(tiddler.title, "My Note");
        assert_eq!(tiddler.tags.as_deref(), Some("Obsidian draft"));
        assert_eq!(tiddler.text, "! Title\n\nSee [[shown|Other]]");
    }

    #[test]
    fn test_import_without_inline_extraction() {
        let options = ImportOptions {
            extract_inline_tags: false,
        };
        let tiddler = import_markdown_with("body #kept\n", "n.md", &options);
        assert_eq!(tiddler.tags, None);
        assert_eq!(tiddler.text, "body #kept");
    }
}
