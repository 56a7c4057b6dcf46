//! Check command implementation.
//!
//! The `snipcheck check` command verifies that every primary-language sample
//! with snippet regions has a secondary-language counterpart exposing the
//! same regions.

use std::path::{Path, PathBuf};

use crate::check::{LanguagePair, SnippetChecker};
use crate::cli::args::CheckArgs;
use crate::discovery::NamePattern;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Exit code for a detected snippet inconsistency.
pub const EXIT_INCONSISTENT: i32 = 1;

/// The check command implementation.
pub struct CheckCommand {
    project_root: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(project_root: &Path, args: CheckArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn checker(&self) -> Result<SnippetChecker> {
        let languages = LanguagePair::new(&self.args.primary_ext, &self.args.secondary_ext)?;
        let source_dir = NamePattern::new(&self.args.source_dir)?;
        Ok(SnippetChecker::new(&self.project_root, languages).with_source_dir(source_dir))
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let checker = self.checker()?;

        match checker.run(ui) {
            Ok(_) => Ok(CommandResult::success()),
            Err(e) if e.is_inconsistency() => {
                ui.error(&format!("ERROR: {}", e));
                Ok(CommandResult::failure(EXIT_INCONSISTENT))
            }
            Err(e) => Err(e),
        }
    }
}
