//! Error types for vault operations.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading a note's YAML frontmatter.
#[derive(Error, Debug)]
pub enum FrontmatterError {
    /// Opening `---` found but no closing delimiter.
    #[error("frontmatter is not terminated by a closing `---`")]
    Unterminated,

    /// YAML syntax error inside the frontmatter block.
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Frontmatter parsed, but is not a key/value mapping.
    #[error("frontmatter must be a mapping, found {0}")]
    NotAMapping(&'static str),

    /// A tag entry that cannot be read as text (a list or mapping).
    #[error("tag at position {0} is not a scalar value")]
    InvalidTag(usize),

    /// `tags` key present with no value.
    #[error("`tags` is null")]
    NullTags,
}

/// Error types for generator and verifier runs.
#[derive(Error, Debug)]
pub enum VaultError {
    /// Low-level I/O error from std::io.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Vault root given to the verifier is not a directory.
    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// Failed to serialize generated frontmatter.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Failed to read a note's frontmatter.
    #[error("frontmatter error: {0}")]
    Frontmatter(#[from] FrontmatterError),
}
