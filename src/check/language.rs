//! Primary/secondary language pairing.

use anyhow::anyhow;

use crate::discovery::NamePattern;
use crate::error::Result;

/// Default extension of primary-language samples.
pub const DEFAULT_PRIMARY_EXT: &str = "java";

/// Default extension of secondary-language samples.
pub const DEFAULT_SECONDARY_EXT: &str = "kt";

/// The two file extensions whose samples must stay in sync.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    primary: String,
    secondary: String,
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY_EXT.to_string(),
            secondary: DEFAULT_SECONDARY_EXT.to_string(),
        }
    }
}

impl LanguagePair {
    /// Create a pair from two extensions. A leading dot is ignored.
    pub fn new(primary: &str, secondary: &str) -> Result<Self> {
        Ok(Self {
            primary: normalize_ext(primary)?,
            secondary: normalize_ext(secondary)?,
        })
    }

    /// Primary extension without the dot.
    pub fn primary_ext(&self) -> &str {
        &self.primary
    }

    /// Secondary extension without the dot.
    pub fn secondary_ext(&self) -> &str {
        &self.secondary
    }

    /// Pattern matching every primary-language file name.
    pub fn primary_pattern(&self) -> Result<NamePattern> {
        NamePattern::new(&format!("*.{}", self.primary))
    }

    /// Name of the secondary file paired with `primary_name`.
    ///
    /// Only the trailing extension is swapped.
    pub fn secondary_name(&self, primary_name: &str) -> String {
        let stem = primary_name
            .strip_suffix(&format!(".{}", self.primary))
            .unwrap_or(primary_name);
        format!("{}.{}", stem, self.secondary)
    }
}

fn normalize_ext(ext: &str) -> Result<String> {
    let ext = ext.trim().trim_start_matches('.');
    if ext.is_empty() {
        return Err(anyhow!("File extension must not be empty").into());
    }
    if let Some(bad) = ext
        .chars()
        .find(|c| matches!(c, '/' | '\\' | '*' | '?' | '[' | ']'))
    {
        return Err(anyhow!("File extension '{}' contains '{}'", ext, bad).into());
    }
    Ok(ext.to_string())
}
