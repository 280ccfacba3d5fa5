//! Note Generator Module
//!
//! Writes synthetic PARA notes with randomized YAML frontmatter, used as
//! fixtures for the verifier.

pub mod config;
pub mod templates;
pub mod writer;

pub use config::GeneratorConfig;
pub use templates::{CONTENT_TEMPLATES, TOPICS, generate_filename, render_body};
pub use writer::{GeneratedFrontmatter, GeneratedNote, NoteGenerator, NoteStatus, render_note};
