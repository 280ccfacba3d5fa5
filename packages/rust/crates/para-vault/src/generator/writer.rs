//! Note Generator - Writes synthetic notes into a target directory.
//!
//! Each note picks a random topic and PARA category, samples 1-3 tags from
//! that category's vocabulary and appends one GTD context tag.
//!
//! # Example
//!
//! ```ignore
//! use para_vault::{GeneratorConfig, NoteGenerator};
//!
//! let mut generator = NoteGenerator::new(GeneratorConfig::new().with_seed(7));
//! let notes = generator.generate_into(Path::new("fixtures"), &mut std::io::stdout())?;
//! ```

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{Duration, Local, NaiveDateTime};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::error::VaultError;
use crate::generator::config::GeneratorConfig;
use crate::generator::templates::{CONTENT_TEMPLATES, TOPICS, generate_filename, render_body};
use crate::vocabulary::{Category, GTD_CONTEXT_TAGS};

/// Timestamp layout used in the `date` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Maximum backdating of a generated note, in days.
const MAX_AGE_DAYS: i64 = 365;

/// Workflow status of a generated note.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NoteStatus {
    /// Being worked on
    Active,
    /// Started, not finished
    InProgress,
    /// Done
    Completed,
    /// Paused
    OnHold,
}

impl NoteStatus {
    /// All statuses, sampled uniformly.
    pub const ALL: [Self; 4] = [Self::Active, Self::InProgress, Self::Completed, Self::OnHold];

    /// Name as written to frontmatter.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
        }
    }
}

impl std::fmt::Display for NoteStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Frontmatter written at the top of a generated note.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GeneratedFrontmatter {
    /// `"{topic} {index}"`
    pub title: String,
    /// Backdated creation time, formatted with [`DATE_FORMAT`].
    pub date: String,
    /// Category tags followed by one GTD context tag.
    pub tags: Vec<String>,
    /// Workflow status.
    pub status: NoteStatus,
}

/// A note built by the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedNote {
    /// 1-based position in the run.
    pub index: usize,
    /// Topic the note is about.
    pub topic: &'static str,
    /// Category whose vocabulary the tags were sampled from.
    pub category: Category,
    /// File name inside the target directory.
    pub filename: String,
    /// YAML metadata.
    pub front_matter: GeneratedFrontmatter,
    /// Markdown body.
    pub body: String,
}

impl GeneratedNote {
    /// Full file content: frontmatter block followed by the body.
    ///
    /// # Errors
    ///
    /// Returns an error if the frontmatter cannot be serialized.
    pub fn content(&self) -> Result<String, VaultError> {
        render_note(&self.front_matter, &self.body)
    }
}

/// Render `---\n<yaml>---\n\n<body>`.
///
/// # Errors
///
/// Returns an error if the frontmatter cannot be serialized.
pub fn render_note(front_matter: &GeneratedFrontmatter, body: &str) -> Result<String, VaultError> {
    let yaml = serde_yaml::to_string(front_matter)?;
    Ok(format!("---\n{yaml}---\n\n{body}"))
}

/// Generates synthetic PARA notes.
#[derive(Debug)]
pub struct NoteGenerator {
    config: GeneratorConfig,
    rng: StdRng,
    now: NaiveDateTime,
}

impl NoteGenerator {
    /// Create a generator; seeds from `config.seed` when set.
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self {
            config,
            rng,
            now: Local::now().naive_local(),
        }
    }

    /// Pin the reference time notes are backdated from.
    #[must_use]
    pub fn with_clock(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    /// Build one note in memory without touching the file system.
    pub fn generate_note(&mut self, index: usize) -> GeneratedNote {
        let topic = TOPICS[self.rng.gen_range(0..TOPICS.len())];
        let category = Category::ALL[self.rng.gen_range(0..Category::ALL.len())];

        let title = format!("{topic} {index}");
        let tags = self.generate_tags(category);
        let template = CONTENT_TEMPLATES[self.rng.gen_range(0..CONTENT_TEMPLATES.len())];
        let body = render_body(template, &title, topic);

        let age = Duration::days(self.rng.gen_range(0..=MAX_AGE_DAYS));
        let front_matter = GeneratedFrontmatter {
            title,
            date: (self.now - age).format(DATE_FORMAT).to_string(),
            tags,
            status: NoteStatus::ALL[self.rng.gen_range(0..NoteStatus::ALL.len())],
        };

        GeneratedNote {
            index,
            topic,
            category,
            filename: generate_filename(topic, index),
            front_matter,
            body,
        }
    }

    /// Sample 1-3 category tags, then one GTD tag not already present.
    fn generate_tags(&mut self, category: Category) -> Vec<String> {
        let amount = self.rng.gen_range(1..=3);
        let mut tags: Vec<String> = category
            .tags()
            .choose_multiple(&mut self.rng, amount)
            .map(|tag| (*tag).to_string())
            .collect();

        let contexts: Vec<&str> = GTD_CONTEXT_TAGS
            .iter()
            .copied()
            .filter(|ctx| !tags.iter().any(|tag| tag == ctx))
            .collect();
        if let Some(ctx) = contexts.choose(&mut self.rng) {
            tags.push((*ctx).to_string());
        }
        tags
    }

    /// Write `config.num_files` notes into `target_dir`, reporting progress to `out`.
    ///
    /// Creates `target_dir` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns the first I/O or serialization error; notes already written
    /// are left in place.
    pub fn generate_into<W: Write>(
        &mut self,
        target_dir: &Path,
        out: &mut W,
    ) -> Result<Vec<GeneratedNote>, VaultError> {
        fs::create_dir_all(target_dir)?;

        let mut notes = Vec::with_capacity(self.config.num_files);
        for index in 1..=self.config.num_files {
            let note = self.generate_note(index);
            let path = target_dir.join(&note.filename);
            fs::write(&path, note.content()?)?;
            log::debug!("Wrote {} ({})", path.display(), note.category);

            writeln!(out, "Generated: {}", note.filename)?;
            writeln!(out, "Category: {}", note.category)?;
            writeln!(out, "Tags: {}\n", note.front_matter.tags.join(", "))?;
            notes.push(note);
        }

        log::info!(
            "Generated {} notes in {}",
            notes.len(),
            target_dir.display()
        );
        Ok(notes)
    }
}
