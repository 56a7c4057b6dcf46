//! Snippet consistency checking.
//!
//! The check runs in three layers:
//!
//! - [`SnippetChecker`] - finds every source folder and walks its primary files
//! - [`PairValidator`] - validates one primary file against its secondary file
//! - [`LanguagePair`] - maps primary file names to secondary file names
//!
//! The first inconsistency aborts the run and is returned as a
//! [`SnipError`](crate::error::SnipError).

pub mod language;
pub mod pair;
pub mod runner;

pub use language::{LanguagePair, DEFAULT_PRIMARY_EXT, DEFAULT_SECONDARY_EXT};
pub use pair::{PairOutcome, PairValidator};
pub use runner::{RunSummary, SnippetChecker, DEFAULT_SOURCE_DIR};
