//! Run orchestration across every source folder.

use std::path::{Path, PathBuf};

use super::language::LanguagePair;
use super::pair::{file_name, PairOutcome, PairValidator};
use crate::discovery::{find_matching, NamePattern};
use crate::error::Result;
use crate::ui::UserInterface;

/// Default name of the folders that hold paired samples.
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Counts gathered during a successful run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Source folders checked.
    pub folders: usize,
    /// Primary files whose secondary file matched.
    pub matched: usize,
    /// Primary files without regions.
    pub skipped: usize,
}

/// Checks snippet consistency for every source folder under a root.
///
/// # Example
///
/// ```no_run
/// use snipcheck::check::{LanguagePair, SnippetChecker};
/// use snipcheck::ui::MockUI;
///
/// let checker = SnippetChecker::new(".", LanguagePair::default());
/// let mut ui = MockUI::new();
/// let summary = checker.run(&mut ui).unwrap();
/// println!("{} pair(s) matched", summary.matched);
/// ```
#[derive(Debug, Clone)]
pub struct SnippetChecker {
    root: PathBuf,
    source_dir: NamePattern,
    validator: PairValidator,
}

impl SnippetChecker {
    /// Create a checker rooted at `root` using the default `src` convention.
    pub fn new(root: impl Into<PathBuf>, languages: LanguagePair) -> Self {
        Self {
            root: root.into(),
            source_dir: NamePattern::exact(DEFAULT_SOURCE_DIR),
            validator: PairValidator::new(languages),
        }
    }

    /// Use a different pattern for source folder names.
    pub fn with_source_dir(mut self, pattern: NamePattern) -> Self {
        self.source_dir = pattern;
        self
    }

    /// Get the root path.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every source folder under the root, in walk order.
    pub fn source_folders(&self) -> Result<Vec<PathBuf>> {
        find_matching(&self.root, &self.source_dir)
    }

    /// Check every source folder, stopping at the first failure.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<RunSummary> {
        let mut summary = RunSummary::default();

        for folder in self.source_folders()? {
            self.check_folder(&folder, ui, &mut summary)?;
            summary.folders += 1;
        }

        tracing::debug!(
            "Checked {} folder(s): {} matched, {} skipped",
            summary.folders,
            summary.matched,
            summary.skipped
        );
        Ok(summary)
    }

    /// Check every primary file within one source folder.
    pub fn check_folder(
        &self,
        folder: &Path,
        ui: &mut dyn UserInterface,
        summary: &mut RunSummary,
    ) -> Result<()> {
        ui.show_header(&format!("Checking snippets in folder: {}", folder.display()));

        let primary_pattern = self.validator.languages().primary_pattern()?;
        for primary in find_matching(folder, &primary_pattern)? {
            match self.validator.validate(folder, &primary)? {
                PairOutcome::Skipped { .. } => summary.skipped += 1,
                PairOutcome::Matched {
                    primary, secondary, ..
                } => {
                    ui.success(&format!(
                        "SUCCESS: {} <--> {}",
                        file_name(&primary),
                        file_name(&secondary)
                    ));
                    summary.matched += 1;
                }
            }
        }

        ui.message("Done");
        Ok(())
    }
}
