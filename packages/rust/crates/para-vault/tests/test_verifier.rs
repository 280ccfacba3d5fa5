//! Tests for vault verification scenarios.

use std::path::Path;

use tempfile::TempDir;

use para_vault::{Category, GeneratorConfig, NoteGenerator, VaultError, VaultVerifier};

fn write_note(vault: &Path, relative: &str, content: &str) {
    let path = vault.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn note(tags: &str) -> String {
    format!("---\ntitle: Test\ndate: 2024-01-01 00:00:00\ntags: {tags}\nstatus: active\n---\n\n# Test\n")
}

fn make_vault(dirs: &[&str]) -> TempDir {
    let vault = TempDir::new().unwrap();
    for dir in dirs {
        std::fs::create_dir_all(vault.path().join(dir)).unwrap();
    }
    vault
}

#[test]
fn test_project_note_with_area_tags_is_misplaced() {
    let vault = make_vault(&["projects", "areas", "resources", "archives"]);
    write_note(vault.path(), "projects/foo.md", &note("[health, learning]"));

    let report = VaultVerifier::new(vault.path()).verify().unwrap();
    assert!(!report.is_clean());
    assert_eq!(report.misplaced.len(), 1);

    let entry = &report.misplaced[0];
    assert_eq!(entry.file, "foo.md");
    assert_eq!(entry.current_dir, Category::Projects);
    assert_eq!(entry.suggested_dir, Category::Areas);
    assert_eq!(entry.tags, vec!["health", "learning"]);
}

#[test]
fn test_archived_note_in_archives_is_clean() {
    let vault = make_vault(&["projects", "areas", "resources", "archives"]);
    write_note(vault.path(), "archives/bar.md", &note("[archived]"));

    let report = VaultVerifier::new(vault.path()).verify().unwrap();
    assert!(report.is_clean());
    assert_eq!(
        report.files_by_category[&Category::Archives],
        vec!["bar.md"]
    );
}

#[test]
fn test_missing_directory_is_skipped_with_warning() {
    let vault = make_vault(&["projects", "areas", "archives"]);
    write_note(vault.path(), "projects/sprint.md", &note("[sprint, next]"));
    write_note(vault.path(), "areas/gym.md", &note("[fitness]"));
    write_note(vault.path(), "archives/old.md", &note("['2023', old]"));

    let report = VaultVerifier::new(vault.path()).verify().unwrap();
    assert_eq!(report.missing_dirs, vec![Category::Resources]);
    assert_eq!(report.file_count(), 3);
    assert!(report.is_clean());

    let mut out = Vec::new();
    report.render_text(&mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Warning: resources directory doesn't exist"));
    assert!(text.contains("All files appear to be correctly sorted!"));
}

#[test]
fn test_untagged_note_belongs_in_resources() {
    let vault = make_vault(&["projects", "areas", "resources", "archives"]);
    write_note(vault.path(), "resources/loose.md", "---\ntitle: Loose\n---\n# Loose\n");
    write_note(vault.path(), "areas/untagged.md", "---\ntitle: Untagged\n---\n");

    let report = VaultVerifier::new(vault.path()).verify().unwrap();
    assert_eq!(report.misplaced.len(), 1);
    assert_eq!(report.misplaced[0].file, "untagged.md");
    assert_eq!(report.misplaced[0].suggested_dir, Category::Resources);
}

#[test]
fn test_notes_without_frontmatter_are_ignored() {
    let vault = make_vault(&["projects", "areas", "resources", "archives"]);
    write_note(vault.path(), "projects/readme.md", "# Readme\n\nNo metadata here.\n");
    write_note(vault.path(), "projects/notes.txt", &note("[health]"));

    let report = VaultVerifier::new(vault.path()).verify().unwrap();
    assert_eq!(report.file_count(), 0);
    assert!(report.errors.is_empty());
    assert!(report.is_clean());
}

#[test]
fn test_broken_note_is_reported_and_scan_continues() {
    let vault = make_vault(&["projects", "areas", "resources", "archives"]);
    write_note(vault.path(), "areas/a_broken.md", "---\ntags: [health\n---\n");
    write_note(vault.path(), "areas/b_unterminated.md", "---\ntags: [health]\n");
    write_note(vault.path(), "areas/c_good.md", &note("[Career]"));
    write_note(vault.path(), "areas/d_misfiled.md", &note("[book, guide]"));

    let report = VaultVerifier::new(vault.path()).verify().unwrap();
    let failed: Vec<_> = report.errors.iter().map(|e| e.file.as_str()).collect();
    assert_eq!(failed, vec!["a_broken.md", "b_unterminated.md"]);
    assert_eq!(
        report.files_by_category[&Category::Areas],
        vec!["c_good.md", "d_misfiled.md"]
    );
    assert_eq!(report.misplaced.len(), 1);
    assert_eq!(report.misplaced[0].suggested_dir, Category::Resources);
}

#[test]
fn test_empty_frontmatter_and_null_tags_are_errors_not_misplacements() {
    let vault = make_vault(&["projects", "areas", "resources", "archives"]);
    write_note(vault.path(), "projects/empty.md", "---\n---\n");
    write_note(vault.path(), "projects/nulltags.md", "---\ntitle: a\ntags:\n---\n");
    write_note(vault.path(), "projects/sprint.md", &note("[sprint]"));

    let report = VaultVerifier::new(vault.path()).verify().unwrap();
    let failed: Vec<_> = report.errors.iter().map(|e| e.file.as_str()).collect();
    assert_eq!(failed, vec!["empty.md", "nulltags.md"]);
    assert_eq!(
        report.files_by_category[&Category::Projects],
        vec!["sprint.md"]
    );
    assert!(report.is_clean());
}

#[test]
fn test_not_a_directory() {
    let vault = TempDir::new().unwrap();
    let err = VaultVerifier::new(vault.path().join("missing"))
        .verify()
        .unwrap_err();
    assert!(matches!(err, VaultError::NotADirectory(_)));
    assert!(err.to_string().ends_with("is not a directory"));
}

#[test]
fn test_generated_notes_filed_by_category_only_drift_via_reference() {
    let staging = TempDir::new().unwrap();
    let notes = NoteGenerator::new(GeneratorConfig::new().with_num_files(40).with_seed(2024))
        .generate_into(staging.path(), &mut std::io::sink())
        .unwrap();

    let vault = make_vault(&["projects", "areas", "resources", "archives"]);
    for generated in &notes {
        let dest = vault
            .path()
            .join(generated.category.dir_name())
            .join(&generated.filename);
        std::fs::copy(staging.path().join(&generated.filename), dest).unwrap();
    }

    let report = VaultVerifier::new(vault.path()).verify().unwrap();
    assert_eq!(report.file_count(), 40);
    assert!(report.errors.is_empty());

    // A single archive tag plus the `reference` context ties with resources,
    // and resources comes first.
    for entry in &report.misplaced {
        assert_eq!(entry.current_dir, Category::Archives, "{entry:?}");
        assert_eq!(entry.suggested_dir, Category::Resources, "{entry:?}");
        assert_eq!(entry.tags.len(), 2, "{entry:?}");
        assert!(entry.tags.iter().any(|t| t == "reference"), "{entry:?}");
    }
}
