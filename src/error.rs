//! Error types for snipcheck operations.
//!
//! This module defines [`SnipError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The three snippet inconsistencies (missing secondary file, region
//!   mismatch, unclosed region) are distinct variants carrying their payload
//! - Filesystem and traversal failures keep the offending path
//! - Use `anyhow::Error` (via `SnipError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

use crate::regions::RegionSet;

/// Core error type for snipcheck operations.
#[derive(Debug, Error)]
pub enum SnipError {
    /// A primary file has regions but no secondary file exists under the root.
    #[error("Missing .{secondary_ext} file for .{primary_ext} file {primary}")]
    MissingSecondaryFile {
        primary: String,
        primary_ext: String,
        secondary_ext: String,
    },

    /// The secondary file lacks regions present in the primary file.
    #[error("The following snippets are missing from {secondary}: {missing}")]
    RegionMismatch { secondary: String, missing: RegionSet },

    /// A scanned file opens regions it never closes.
    #[error("The following snippets in {} are missing END tags: {missing}", .path.display())]
    UnclosedRegion { path: PathBuf, missing: RegionSet },

    /// A region name contains characters outside `[\w-]`.
    #[error("Invalid region name: '{name}'")]
    InvalidRegionName { name: String },

    /// A filename pattern could not be compiled.
    #[error("Invalid name pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Directory traversal failed.
    #[error("Failed to walk {}: {message}", .root.display())]
    Walk { root: PathBuf, message: String },

    /// A file could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SnipError {
    /// Whether this error is a snippet inconsistency rather than an
    /// environmental failure.
    pub fn is_inconsistency(&self) -> bool {
        matches!(
            self,
            SnipError::MissingSecondaryFile { .. }
                | SnipError::RegionMismatch { .. }
                | SnipError::UnclosedRegion { .. }
        )
    }
}

/// Result type alias for snipcheck operations.
pub type Result<T> = std::result::Result<T, SnipError>;
