//! Tag-to-category classification.
//!
//! Counts how many of a note's tags fall in each PARA vocabulary and picks the
//! category with the most hits.
//!
//! # Rules
//!
//! - Tags are compared lowercased; duplicates count once.
//! - Ties resolve to the earliest category in `Category::ALL`.
//! - When no tag matches any vocabulary the note belongs in `resources`.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::vocabulary::Category;

/// Lowercase and deduplicate a tag list.
pub fn normalize_tags<I, S>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| tag.as_ref().to_lowercase())
        .collect()
}

/// Per-category intersection counts for one tag set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TagMatches {
    counts: [usize; 4],
}

impl TagMatches {
    /// Count vocabulary hits for `tags`.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized = normalize_tags(tags);
        let mut counts = [0; 4];
        for (slot, category) in counts.iter_mut().zip(Category::ALL) {
            let vocabulary = category.vocabulary();
            *slot = normalized
                .iter()
                .filter(|tag| vocabulary.contains(tag.as_str()))
                .count();
        }
        Self { counts }
    }

    /// Hit count for a single category.
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.counts[category as usize]
    }

    /// True when no tag matched any vocabulary.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|count| *count == 0)
    }

    /// Best-matching category.
    #[must_use]
    pub fn best(&self) -> Category {
        if self.is_empty() {
            return Category::FALLBACK;
        }
        let mut best = Category::ALL[0];
        let mut best_count = self.counts[0];
        for (category, count) in Category::ALL.into_iter().zip(self.counts).skip(1) {
            // strictly greater: earlier categories win ties
            if count > best_count {
                best = category;
                best_count = count;
            }
        }
        best
    }
}

/// Classify a tag list into its best-matching PARA category.
pub fn classify<I, S>(tags: I) -> Category
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    TagMatches::from_tags(tags).best()
}
