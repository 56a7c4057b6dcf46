//! Region marker scanning.
//!
//! A marker is a `[START name]` or `[END name]` token anywhere on a line,
//! usually inside a comment. Each line contributes at most one start name
//! and one end name.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::name::{RegionName, RegionSet};
use crate::error::{Result, SnipError};

static START_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[START ([\w\-]+)\]").expect("START_TAG must compile"));

static END_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[END ([\w\-]+)\]").expect("END_TAG must compile"));

/// Start and end names collected from one file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markers {
    /// Names opened with `[START name]`.
    pub starts: RegionSet,
    /// Names closed with `[END name]`.
    pub ends: RegionSet,
}

impl Markers {
    /// Collect markers from file content split on line-feed.
    pub fn parse(content: &str) -> Self {
        let mut markers = Self::default();
        for line in content.split('\n') {
            if let Some(name) = capture_name(&START_TAG, line) {
                markers.starts.insert(name);
            }
            if let Some(name) = capture_name(&END_TAG, line) {
                markers.ends.insert(name);
            }
        }
        markers
    }

    /// Names that are opened but never closed.
    ///
    /// Only set membership is compared; ordering and counts are ignored, and
    /// end names without a start are not reported.
    pub fn unclosed(&self) -> RegionSet {
        self.starts.difference(&self.ends)
    }

    /// Validate that every region is closed and return the region set.
    pub fn into_regions(self, path: &Path) -> Result<RegionSet> {
        let missing = self.unclosed();
        if !missing.is_empty() {
            return Err(SnipError::UnclosedRegion {
                path: path.to_path_buf(),
                missing,
            });
        }
        Ok(self.starts)
    }
}

fn capture_name(pattern: &Regex, line: &str) -> Option<RegionName> {
    let caps = pattern.captures(line)?;
    RegionName::new(&caps[1]).ok()
}

/// Scan in-memory content attributed to `path`.
pub fn scan_str(content: &str, path: &Path) -> Result<RegionSet> {
    Markers::parse(content).into_regions(path)
}

/// Read a file and return its validated region set.
///
/// Fails with [`SnipError::UnclosedRegion`] when a started region has no
/// matching end marker anywhere in the file.
pub fn scan_file(path: &Path) -> Result<RegionSet> {
    let bytes = std::fs::read(path).map_err(|source| SnipError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    let markers = Markers::parse(&content);
    tracing::debug!(
        "Scanned {}: {} start marker(s), {} end marker(s)",
        path.display(),
        markers.starts.len(),
        markers.ends.len()
    );

    markers.into_regions(path)
}
