//! Filesystem discovery by name pattern.
//!
//! [`find_matching`] walks a directory tree and returns every file or
//! directory whose name matches a [`NamePattern`]. It is used both to locate
//! source roots (directories named `src`) and to locate sample files inside
//! them.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use snipcheck::discovery::{find_matching, NamePattern};
//!
//! let pattern = NamePattern::new("*.java").unwrap();
//! for path in find_matching(Path::new("app/src"), &pattern).unwrap() {
//!     println!("{}", path.display());
//! }
//! ```

pub mod pattern;

pub use pattern::NamePattern;

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, SnipError};

/// Recursively find entries below `root` whose name matches `pattern`.
///
/// Directories are visited top-down. All matches directly inside a
/// directory (subdirectories first, then files, each sorted by name) are
/// recorded before any subdirectory is entered, so shallower matches come
/// first and the result is stable between runs. `root` itself is never a
/// candidate. Symbolic links are not followed.
///
/// An unreadable `root` is an error; unreadable entries further down are
/// logged and skipped.
pub fn find_matching(root: &Path, pattern: &NamePattern) -> Result<Vec<PathBuf>> {
    let (dirs, files) = read_level(root).map_err(|e| SnipError::Walk {
        root: root.to_path_buf(),
        message: e.to_string(),
    })?;

    let mut matches = Vec::new();
    collect_level(root, dirs, files, pattern, &mut matches);

    tracing::debug!(
        "Found {} match(es) for '{}' under {}",
        matches.len(),
        pattern,
        root.display()
    );
    Ok(matches)
}

fn collect_level(
    root: &Path,
    dirs: Vec<PathBuf>,
    files: Vec<PathBuf>,
    pattern: &NamePattern,
    matches: &mut Vec<PathBuf>,
) {
    matches.extend(
        dirs.iter()
            .chain(&files)
            .filter(|p| matches_name(p, pattern))
            .cloned(),
    );

    for dir in dirs {
        match read_level(&dir) {
            Ok((sub_dirs, sub_files)) => {
                collect_level(root, sub_dirs, sub_files, pattern, matches);
            }
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
            }
        }
    }
}

/// Immediate children of `dir`, split into directories and everything else.
fn read_level(dir: &Path) -> std::result::Result<(Vec<PathBuf>, Vec<PathBuf>), walkdir::Error> {
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };

        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        } else {
            files.push(entry.into_path());
        }
    }

    Ok((dirs, files))
}

fn matches_name(path: &Path, pattern: &NamePattern) -> bool {
    path.file_name()
        .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
}
