//! YAML Frontmatter Parsing
//!
//! Extracts and parses the `---` delimited YAML block at the top of a note.
//! Parsing is lenient about field types: only the shape needed for
//! classification (a mapping with an optional `tags` sequence) is enforced.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_yaml::Value;

use crate::error::{FrontmatterError, VaultError};

const DELIMITER: &str = "---";

/// Split note content into `(frontmatter, body)`.
///
/// Returns `Ok(None)` when the content does not start with `---`; such notes
/// carry no metadata. The frontmatter runs up to the next `---`.
///
/// # Errors
///
/// Returns [`FrontmatterError::Unterminated`] if no closing delimiter exists.
///
/// # Examples
///
/// ```
/// use para_vault::frontmatter::split_frontmatter;
///
/// let (yaml, body) = split_frontmatter("---\ntags: [book]\n---\n\n# Note")
///     .unwrap()
///     .unwrap();
/// assert_eq!(yaml, "\ntags: [book]\n");
/// assert_eq!(body, "\n\n# Note");
/// ```
pub fn split_frontmatter(content: &str) -> Result<Option<(&str, &str)>, FrontmatterError> {
    let Some(after_start) = content.strip_prefix(DELIMITER) else {
        return Ok(None);
    };
    let end = after_start
        .find(DELIMITER)
        .ok_or(FrontmatterError::Unterminated)?;
    Ok(Some((
        &after_start[..end],
        &after_start[end + DELIMITER.len()..],
    )))
}

/// Extract the raw YAML frontmatter from note content.
///
/// # Errors
///
/// Returns [`FrontmatterError::Unterminated`] if no closing delimiter exists.
pub fn extract_frontmatter(content: &str) -> Result<Option<&str>, FrontmatterError> {
    Ok(split_frontmatter(content)?.map(|(yaml, _)| yaml))
}

/// Metadata read back from a note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NoteFrontmatter {
    /// Note title.
    pub title: Option<String>,
    /// Creation timestamp as written (`YYYY-MM-DD HH:MM:SS`).
    pub date: Option<String>,
    /// Tags in document order, as written.
    pub tags: Vec<String>,
    /// Workflow status (`active`, `in_progress`, ...).
    pub status: Option<String>,
}

/// Parse YAML frontmatter text into [`NoteFrontmatter`].
///
/// A missing `tags` key yields no tags; an explicit `tags:` with no value
/// is an error, as is an empty block.
///
/// # Errors
///
/// Returns an error if the YAML is invalid, is empty or not a mapping, has
/// a null `tags` value, or holds a non-scalar tag.
pub fn parse_frontmatter(yaml_content: &str) -> Result<NoteFrontmatter, FrontmatterError> {
    if yaml_content.trim().is_empty() {
        return Err(FrontmatterError::NotAMapping("null"));
    }
    let mapping = match serde_yaml::from_str::<Value>(yaml_content)? {
        Value::Mapping(mapping) => mapping,
        other => return Err(FrontmatterError::NotAMapping(value_kind(&other))),
    };

    let tags = match mapping.get("tags") {
        None => Vec::new(),
        Some(Value::Null) => return Err(FrontmatterError::NullTags),
        Some(Value::Sequence(items)) => items
            .iter()
            .enumerate()
            .map(|(idx, item)| scalar_to_string(item).ok_or(FrontmatterError::InvalidTag(idx)))
            .collect::<Result<Vec<_>, _>>()?,
        Some(single) => vec![scalar_to_string(single).ok_or(FrontmatterError::InvalidTag(0))?],
    };

    Ok(NoteFrontmatter {
        title: mapping.get("title").and_then(scalar_to_string),
        date: mapping.get("date").and_then(scalar_to_string),
        tags,
        status: mapping.get("status").and_then(scalar_to_string),
    })
}

/// Parse a note's content.
///
/// Returns `Ok(None)` for notes without frontmatter.
///
/// # Errors
///
/// Returns an error if the frontmatter is unterminated or unparsable.
pub fn parse_note(content: &str) -> Result<Option<NoteFrontmatter>, FrontmatterError> {
    extract_frontmatter(content)?
        .map(parse_frontmatter)
        .transpose()
}

/// Read and parse frontmatter from a markdown file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or its frontmatter is invalid.
pub fn read_note_file(path: &Path) -> Result<Option<NoteFrontmatter>, VaultError> {
    let content = fs::read_to_string(path)?;
    Ok(parse_note(&content)?)
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
