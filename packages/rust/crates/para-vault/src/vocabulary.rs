//! PARA categories and their fixed tag vocabularies.
//!
//! The vocabularies are process-wide constants shared by the generator (which
//! samples from them) and the classifier (which intersects against them).

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Tags that mark a note as project work.
pub const PROJECT_TAGS: &[&str] = &[
    "project",
    "deadline",
    "milestone",
    "client",
    "team",
    "sprint",
    "development",
];

/// Tags that mark a note as an ongoing area of responsibility.
pub const AREA_TAGS: &[&str] = &[
    "health", "finance", "career", "learning", "family", "fitness", "skills",
];

/// Tags that mark a note as reference material.
pub const RESOURCE_TAGS: &[&str] = &[
    "reference",
    "article",
    "book",
    "tutorial",
    "guide",
    "template",
    "research",
];

/// Tags that mark a note as inactive.
pub const ARCHIVE_TAGS: &[&str] = &[
    "completed",
    "archived",
    "old",
    "inactive",
    "2023",
    "deprecated",
    "historical",
];

/// GTD workflow-state tags. Used by the generator only; never classified.
pub const GTD_CONTEXT_TAGS: &[&str] = &["next", "waiting", "someday", "reference", "done"];

static PROJECT_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| to_set(PROJECT_TAGS));
static AREA_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| to_set(AREA_TAGS));
static RESOURCE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| to_set(RESOURCE_TAGS));
static ARCHIVE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| to_set(ARCHIVE_TAGS));

fn to_set(tags: &'static [&'static str]) -> HashSet<&'static str> {
    tags.iter().copied().collect()
}

/// PARA category, declared in classification priority order.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Short-term efforts with a goal and a deadline
    Projects,
    /// Long-term responsibilities to maintain
    Areas,
    /// Topics of ongoing interest
    Resources,
    /// Inactive items from the other three
    Archives,
}

impl Category {
    /// All categories in priority order.
    pub const ALL: [Self; 4] = [Self::Projects, Self::Areas, Self::Resources, Self::Archives];

    /// Category used when no tag matches any vocabulary.
    pub const FALLBACK: Self = Self::Resources;

    /// Directory name under the vault root.
    #[must_use]
    pub const fn dir_name(self) -> &'static str {
        match self {
            Self::Projects => "projects",
            Self::Areas => "areas",
            Self::Resources => "resources",
            Self::Archives => "archives",
        }
    }

    /// Tag vocabulary in declaration order (for sampling).
    #[must_use]
    pub const fn tags(self) -> &'static [&'static str] {
        match self {
            Self::Projects => PROJECT_TAGS,
            Self::Areas => AREA_TAGS,
            Self::Resources => RESOURCE_TAGS,
            Self::Archives => ARCHIVE_TAGS,
        }
    }

    /// Tag vocabulary as a set (for intersection).
    #[must_use]
    pub fn vocabulary(self) -> &'static HashSet<&'static str> {
        match self {
            Self::Projects => &PROJECT_SET,
            Self::Areas => &AREA_SET,
            Self::Resources => &RESOURCE_SET,
            Self::Archives => &ARCHIVE_SET,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}
