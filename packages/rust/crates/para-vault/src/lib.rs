//! para-vault - PARA vault fixtures and placement verification.
//!
//! This crate provides two tools around a PARA-organized note vault
//! (Projects / Areas / Resources / Archives):
//! - `generator/` - Writes synthetic Markdown notes with randomized YAML frontmatter
//! - `verifier/` - Checks that notes live in the PARA folder their tags point to
//!
//! # Architecture
//!
//! ```text
//! para-vault/src/
//! ├── lib.rs              # Main module and exports
//! ├── error.rs            # VaultError, FrontmatterError
//! ├── vocabulary.rs       # Category and fixed tag vocabularies
//! ├── classifier.rs       # Tag-to-category classification
//! ├── frontmatter.rs      # YAML frontmatter extraction and parsing
//! ├── generator/          # Synthetic note generation
//! │   ├── mod.rs
//! │   ├── config.rs        # GeneratorConfig
//! │   ├── templates.rs     # Topics, body templates, filename derivation
//! │   └── writer.rs        # NoteGenerator
//! ├── verifier/           # Vault placement verification
//! │   ├── mod.rs
//! │   ├── scanner.rs       # VaultVerifier, FileOutcome
//! │   └── report.rs        # VerificationReport rendering
//! └── bin/para.rs         # `para generate` / `para verify`
//! ```
//!
//! # Classification Rule
//!
//! A note's tags are lowercased and intersected with each category vocabulary.
//! The category with the most hits wins; ties go to the earlier category in
//! `projects > areas > resources > archives` order, and a note with no hits
//! belongs in `resources`.
//!
//! ```yaml
//! ---
//! title: API Development 3
//! date: 2024-05-01 09:30:00
//! tags: [health, learning, next]
//! status: active
//! ---
//! ```
//!
//! The note above classifies to `areas`.

// ============================================================================
// Module Declarations
// ============================================================================

pub mod classifier;
pub mod error;
pub mod frontmatter;
pub mod generator;
pub mod verifier;
pub mod vocabulary;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use classifier::{TagMatches, classify, normalize_tags};
pub use error::{FrontmatterError, VaultError};
pub use frontmatter::{NoteFrontmatter, extract_frontmatter, parse_note};
pub use generator::{
    GeneratedNote, GeneratorConfig, NoteGenerator, NoteStatus, generate_filename, render_note,
};
pub use verifier::{
    ClassifiedNote, FileError, FileOutcome, Misplacement, VaultVerifier, VerificationReport,
};
pub use vocabulary::{Category, GTD_CONTEXT_TAGS};

// ============================================================================
// Version
// ============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
