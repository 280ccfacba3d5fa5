//! Vault Verifier - Checks note placement against tag classification.
//!
//! Scans the four PARA directories of a vault, classifies each note by its
//! frontmatter tags and records notes whose best category differs from the
//! directory they live in.
//!
//! Failures are per file: a note that cannot be read or parsed becomes a
//! [`FileOutcome::Failed`] entry and the scan moves on.

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::classifier::{TagMatches, normalize_tags};
use crate::error::VaultError;
use crate::frontmatter::read_note_file;
use crate::verifier::report::VerificationReport;
use crate::vocabulary::Category;

/// A note whose tags were classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedNote {
    /// File name within its directory.
    pub file: String,
    /// Directory the note lives in.
    pub directory: Category,
    /// Category its tags point to.
    pub suggested: Category,
    /// Lowercased, deduplicated tags in sorted order.
    pub tags: Vec<String>,
    /// Per-category hit counts.
    pub matches: TagMatches,
}

impl ClassifiedNote {
    /// True when the note is filed outside its best category.
    #[must_use]
    pub fn is_misplaced(&self) -> bool {
        self.directory != self.suggested
    }
}

/// A note that could not be processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    /// File name within its directory.
    pub file: String,
    /// Directory the note lives in.
    pub directory: Category,
    /// Human-readable failure reason.
    pub message: String,
}

/// Result of verifying a single note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Frontmatter parsed and tags classified.
    Classified(ClassifiedNote),
    /// No leading `---`; the note carries no metadata and is ignored.
    NoFrontmatter,
    /// Read or parse failure.
    Failed(FileError),
}

/// Verifies note placement inside a PARA vault.
#[derive(Debug, Clone)]
pub struct VaultVerifier {
    root: PathBuf,
}

impl VaultVerifier {
    /// Create a verifier for the vault at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Classify one note filed under `directory`.
    #[must_use]
    pub fn verify_file(&self, path: &Path, directory: Category) -> FileOutcome {
        let file = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        match read_note_file(path) {
            Ok(Some(front_matter)) => {
                let matches = TagMatches::from_tags(&front_matter.tags);
                let suggested = matches.best();
                log::debug!("Classified {directory}/{file} as {suggested}");
                FileOutcome::Classified(ClassifiedNote {
                    file,
                    directory,
                    suggested,
                    tags: normalize_tags(&front_matter.tags).into_iter().collect(),
                    matches,
                })
            }
            Ok(None) => {
                log::debug!("Skipping {directory}/{file}: no frontmatter");
                FileOutcome::NoFrontmatter
            }
            Err(err) => {
                log::error!("Error processing {file}: {err}");
                FileOutcome::Failed(FileError {
                    file,
                    directory,
                    message: err.to_string(),
                })
            }
        }
    }

    /// Scan every PARA directory and build a report.
    ///
    /// Missing directories and unreadable notes are recorded in the report,
    /// not returned as errors.
    ///
    /// # Errors
    ///
    /// Returns [`VaultError::NotADirectory`] if the vault root is not a directory.
    pub fn verify(&self) -> Result<VerificationReport, VaultError> {
        if !self.root.is_dir() {
            return Err(VaultError::NotADirectory(self.root.clone()));
        }

        let mut report = VerificationReport::new(self.root.clone());
        for category in Category::ALL {
            let dir = self.root.join(category.dir_name());
            if !dir.is_dir() {
                log::warn!("{category} directory doesn't exist: {}", dir.display());
                report.record_missing(category);
                continue;
            }

            for path in markdown_files(&dir) {
                report.record(self.verify_file(&path, category));
            }
        }

        log::info!(
            "Verified {} notes in {}: {} misplaced, {} errors",
            report.file_count(),
            self.root.display(),
            report.misplaced.len(),
            report.errors.len()
        );
        Ok(report)
    }
}

/// `*.md` files directly inside `dir`, in file-name order.
fn markdown_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::warn!("Skipping unreadable entry in {}: {err}", dir.display());
                None
            }
        })
        .filter(|e| e.file_type().is_file() && e.file_name().to_string_lossy().ends_with(".md"))
        .map(walkdir::DirEntry::into_path)
        .collect()
}
