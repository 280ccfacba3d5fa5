//! Vault Verifier Module
//!
//! Checks that notes in a PARA vault are filed under the directory their
//! frontmatter tags classify into.

pub mod report;
pub mod scanner;

pub use report::{Misplacement, VerificationReport};
pub use scanner::{ClassifiedNote, FileError, FileOutcome, VaultVerifier};
