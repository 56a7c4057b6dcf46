//! Validation of a single primary/secondary file pair.

use std::path::{Path, PathBuf};

use super::language::LanguagePair;
use crate::discovery::{find_matching, NamePattern};
use crate::error::{Result, SnipError};
use crate::regions::{scan_file, RegionSet};

/// Successful result of validating one primary file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairOutcome {
    /// The primary file has no regions, so no secondary file is required.
    Skipped { primary: PathBuf },
    /// The secondary file exposes every region of the primary file.
    Matched {
        primary: PathBuf,
        secondary: PathBuf,
        regions: RegionSet,
    },
}

impl PairOutcome {
    pub fn is_matched(&self) -> bool {
        matches!(self, PairOutcome::Matched { .. })
    }
}

/// Checks primary files against their secondary counterparts.
#[derive(Debug, Clone, Default)]
pub struct PairValidator {
    languages: LanguagePair,
}

impl PairValidator {
    /// Create a validator for the given language pair.
    pub fn new(languages: LanguagePair) -> Self {
        Self { languages }
    }

    /// The language pair being validated.
    pub fn languages(&self) -> &LanguagePair {
        &self.languages
    }

    /// Validate `primary` against the secondary file found under `root`.
    ///
    /// The secondary file may live anywhere below `root`; when several share
    /// the expected name, the first one in walk order is used. Extra regions
    /// in the secondary file are allowed.
    pub fn validate(&self, root: &Path, primary: &Path) -> Result<PairOutcome> {
        let primary_regions = scan_file(primary)?;
        if primary_regions.is_empty() {
            return Ok(PairOutcome::Skipped {
                primary: primary.to_path_buf(),
            });
        }

        let primary_name = file_name(primary);
        let secondary_name = self.languages.secondary_name(&primary_name);

        let candidates = find_matching(root, &NamePattern::exact(&secondary_name))?;
        let Some(secondary) = candidates.into_iter().next() else {
            return Err(SnipError::MissingSecondaryFile {
                primary: primary_name,
                primary_ext: self.languages.primary_ext().to_string(),
                secondary_ext: self.languages.secondary_ext().to_string(),
            });
        };
        tracing::debug!(
            "Pairing {} with {}",
            primary.display(),
            secondary.display()
        );

        let secondary_regions = scan_file(&secondary)?;
        let missing = primary_regions.difference(&secondary_regions);
        if !missing.is_empty() {
            return Err(SnipError::RegionMismatch {
                secondary: secondary_name,
                missing,
            });
        }

        Ok(PairOutcome::Matched {
            primary: primary.to_path_buf(),
            secondary,
            regions: primary_regions,
        })
    }
}

/// Final path component as a string.
pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
