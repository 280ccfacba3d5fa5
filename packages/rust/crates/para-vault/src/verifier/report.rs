//! Verification report and console rendering.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;

use crate::verifier::scanner::{FileError, FileOutcome};
use crate::vocabulary::Category;

/// A note filed outside the category its tags point to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Misplacement {
    /// File name within its directory.
    pub file: String,
    /// Directory the note lives in.
    pub current_dir: Category,
    /// Directory its tags point to.
    pub suggested_dir: Category,
    /// Lowercased tags in sorted order.
    pub tags: Vec<String>,
}

/// Outcome of a full vault scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationReport {
    /// Vault root that was scanned.
    pub vault_path: PathBuf,
    /// PARA directories absent from the vault.
    pub missing_dirs: Vec<Category>,
    /// Classified notes per directory, sorted by name.
    pub files_by_category: BTreeMap<Category, Vec<String>>,
    /// Notes whose directory differs from their classification, in scan order.
    pub misplaced: Vec<Misplacement>,
    /// Notes that could not be read or parsed.
    pub errors: Vec<FileError>,
}

impl VerificationReport {
    /// Create an empty report for `vault_path`.
    #[must_use]
    pub fn new(vault_path: PathBuf) -> Self {
        Self {
            vault_path,
            ..Self::default()
        }
    }

    /// Note a PARA directory missing from the vault.
    pub fn record_missing(&mut self, category: Category) {
        if !self.missing_dirs.contains(&category) {
            self.missing_dirs.push(category);
        }
    }

    /// Fold one file outcome into the report.
    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Classified(note) => {
                if note.is_misplaced() {
                    self.misplaced.push(Misplacement {
                        file: note.file.clone(),
                        current_dir: note.directory,
                        suggested_dir: note.suggested,
                        tags: note.tags,
                    });
                }
                let files = self.files_by_category.entry(note.directory).or_default();
                let pos = files.partition_point(|name| name < &note.file);
                files.insert(pos, note.file);
            }
            FileOutcome::NoFrontmatter => {}
            FileOutcome::Failed(error) => self.errors.push(error),
        }
    }

    /// True when no note is misplaced.
    ///
    /// Per-file errors do not affect this.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.misplaced.is_empty()
    }

    /// Number of classified notes.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files_by_category.values().map(Vec::len).sum()
    }

    /// Serialize the report as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the human-readable report.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn render_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for category in &self.missing_dirs {
            writeln!(out, "Warning: {category} directory doesn't exist")?;
        }
        for error in &self.errors {
            writeln!(out, "Error processing {}: {}", error.file, error.message)?;
        }

        writeln!(out, "\nSorting Results:")?;
        writeln!(out, "================")?;

        writeln!(out, "\nFiles by Category:")?;
        for (category, files) in &self.files_by_category {
            writeln!(
                out,
                "\n{} ({} files):",
                category.dir_name().to_uppercase(),
                files.len()
            )?;
            for file in files {
                writeln!(out, "  - {file}")?;
            }
        }

        if self.misplaced.is_empty() {
            writeln!(out, "\nAll files appear to be correctly sorted!")?;
            return Ok(());
        }

        writeln!(out, "\nPotentially Misplaced Files:")?;
        writeln!(out, "==========================")?;
        for entry in &self.misplaced {
            writeln!(out, "\n{}:", entry.file)?;
            writeln!(out, "  Current: {}", entry.current_dir)?;
            writeln!(out, "  Suggested: {}", entry.suggested_dir)?;
            writeln!(out, "  Tags: {}", entry.tags.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::TagMatches;
    use crate::verifier::scanner::ClassifiedNote;

    fn classified(file: &str, directory: Category, tags: &[&str]) -> FileOutcome {
        let matches = TagMatches::from_tags(tags);
        FileOutcome::Classified(ClassifiedNote {
            file: file.to_string(),
            directory,
            suggested: matches.best(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            matches,
        })
    }

    fn render(report: &VerificationReport) -> String {
        let mut buf = Vec::new();
        report.render_text(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_files_are_grouped_and_sorted() {
        let mut report = VerificationReport::new(PathBuf::from("vault"));
        report.record(classified("zeta.md", Category::Areas, &["health"]));
        report.record(classified("alpha.md", Category::Areas, &["family"]));
        report.record(classified("beta.md", Category::Projects, &["sprint"]));
        report.record(FileOutcome::NoFrontmatter);

        assert_eq!(report.file_count(), 3);
        assert_eq!(
            report.files_by_category[&Category::Areas],
            vec!["alpha.md", "zeta.md"]
        );

        let text = render(&report);
        let projects = text.find("PROJECTS (1 files):").unwrap();
        let areas = text.find("AREAS (2 files):").unwrap();
        assert!(projects < areas);
        assert!(text.find("  - alpha.md").unwrap() < text.find("  - zeta.md").unwrap());
        assert!(text.ends_with("All files appear to be correctly sorted!\n"));
        assert!(report.is_clean());
    }

    #[test]
    fn test_misplaced_section() {
        let mut report = VerificationReport::new(PathBuf::from("vault"));
        report.record(classified("foo.md", Category::Projects, &["health", "learning"]));

        assert!(!report.is_clean());
        let text = render(&report);
        assert!(text.contains("Potentially Misplaced Files:"));
        assert!(text.contains("\nfoo.md:\n  Current: projects\n  Suggested: areas\n  Tags: health, learning\n"));
        assert!(!text.contains("correctly sorted"));
    }

    #[test]
    fn test_warnings_and_errors_are_rendered() {
        let mut report = VerificationReport::new(PathBuf::from("vault"));
        report.record_missing(Category::Resources);
        report.record_missing(Category::Resources);
        report.record(FileOutcome::Failed(FileError {
            file: "bad.md".to_string(),
            directory: Category::Archives,
            message: "frontmatter error: boom".to_string(),
        }));

        assert_eq!(report.missing_dirs, vec![Category::Resources]);
        assert!(report.is_clean());
        let text = render(&report);
        assert!(text.starts_with("Warning: resources directory doesn't exist\n"));
        assert!(text.contains("Error processing bad.md: frontmatter error: boom\n"));
    }

    #[test]
    fn test_json_output() {
        let mut report = VerificationReport::new(PathBuf::from("vault"));
        report.record(classified("foo.md", Category::Projects, &["health"]));

        let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(json["misplaced"][0]["suggested_dir"], "areas");
        assert_eq!(json["files_by_category"]["projects"][0], "foo.md");
    }
}
