//! Region names and region sets.
//!
//! - [`RegionName`] - A validated identifier taken from a marker comment
//! - [`RegionSet`] - An ordered, de-duplicated collection of region names

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::SnipError;

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\-]+$").expect("NAME_REGEX must compile"));

/// Identifier of a snippet region.
///
/// Names consist of word characters and hyphens, the same alphabet the
/// marker patterns capture.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionName(String);

impl RegionName {
    /// Create a region name, rejecting characters outside `[\w-]`.
    pub fn new(name: impl Into<String>) -> Result<Self, SnipError> {
        let name = name.into();
        if NAME_REGEX.is_match(&name) {
            Ok(Self(name))
        } else {
            Err(SnipError::InvalidRegionName { name })
        }
    }

    /// The name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RegionName {
    type Err = SnipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for RegionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of region names found in one file.
///
/// Ordered by name so that diagnostics and output are stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSet(BTreeSet<RegionName>);

impl RegionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name, returning whether it was newly inserted.
    pub fn insert(&mut self, name: RegionName) -> bool {
        self.0.insert(name)
    }

    /// Whether the set contains a name.
    pub fn contains(&self, name: &RegionName) -> bool {
        self.0.contains(name)
    }

    /// Names in `self` that are absent from `other`.
    pub fn difference(&self, other: &RegionSet) -> RegionSet {
        self.0.difference(&other.0).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &RegionName> {
        self.0.iter()
    }
}

impl FromIterator<RegionName> for RegionSet {
    fn from_iter<I: IntoIterator<Item = RegionName>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for RegionSet {
    type Item = RegionName;
    type IntoIter = std::collections::btree_set::IntoIter<RegionName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a RegionSet {
    type Item = &'a RegionName;
    type IntoIter = std::collections::btree_set::Iter<'a, RegionName>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for RegionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", name)?;
        }
        write!(f, "}}")
    }
}
