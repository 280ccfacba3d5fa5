//! Topics, body templates and filename derivation for generated notes.

use once_cell::sync::Lazy;
use regex::Regex;

/// Topics a generated note can be about.
pub const TOPICS: &[&str] = &[
    "Machine Learning",
    "Vim Configuration",
    "Project Management",
    "Personal Development",
    "Software Architecture",
    "Team Leadership",
    "System Design",
    "Code Review",
    "Technical Writing",
    "Database Design",
    "API Development",
    "UI/UX Design",
];

/// Markdown bodies with `{title}` and `{topic}` placeholders.
pub const CONTENT_TEMPLATES: &[&str] = &[
    "# {title}\n\nThis is a note about {topic}.\n\n## Key Points\n- Point 1\n- Point 2\n- Point 3",
    "# {title}\n\n## Overview\nDiscussion about {topic}\n\n## Details\n1. First item\n2. Second item",
    "# {title}\n\n> Important note about {topic}\n\n## Notes\n* Note 1\n* Note 2",
];

/// Characters dropped from a topic before it becomes a filename.
static RE_UNSAFE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[^\w\s-]").unwrap_or_else(|err| panic!("invalid RE_UNSAFE regex: {err}"))
});

/// Whitespace and slash runs collapsed to a single underscore.
static RE_SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[\s/]+").unwrap_or_else(|err| panic!("invalid RE_SEPARATOR regex: {err}"))
});

/// Derive a note filename from its topic and 1-based index.
///
/// ```
/// use para_vault::generate_filename;
///
/// assert_eq!(generate_filename("API Development", 3), "API_Development_3.md");
/// assert_eq!(generate_filename("UI/UX Design", 12), "UIUX_Design_12.md");
/// ```
#[must_use]
pub fn generate_filename(topic: &str, index: usize) -> String {
    let stripped = RE_UNSAFE.replace_all(topic, "");
    let safe_topic = RE_SEPARATOR.replace_all(&stripped, "_");
    format!("{safe_topic}_{index}.md")
}

/// Fill a body template with the note title and lowercased topic.
#[must_use]
pub fn render_body(template: &str, title: &str, topic: &str) -> String {
    template
        .replace("{title}", title)
        .replace("{topic}", &topic.to_lowercase())
}
