//! snipcheck - Keep paired sample files' snippet regions in sync.
//!
//! Documentation snippets are pulled from sample code between
//! `[START name]` and `[END name]` markers. When the same sample exists in
//! two languages (Java and Kotlin by default), both files must expose the
//! same regions or the docs break for one of them. snipcheck walks every
//! `src` folder, pairs each primary file with its secondary counterpart and
//! reports the first inconsistency.
//!
//! # Modules
//!
//! - [`check`] - Pair validation and run orchestration
//! - [`cli`] - Command-line interface and argument parsing
//! - [`discovery`] - Filesystem discovery by name pattern
//! - [`error`] - Error types and result aliases
//! - [`regions`] - Region marker scanning
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use snipcheck::regions::scan_str;
//!
//! let java = "// [START upload]\nupload();\n// [END upload]\n";
//! let kotlin = "// [START upload]\nupload()\n// [END upload]\n";
//!
//! let primary = scan_str(java, Path::new("Upload.java")).unwrap();
//! let secondary = scan_str(kotlin, Path::new("Upload.kt")).unwrap();
//! assert!(primary.difference(&secondary).is_empty());
//! ```

pub mod check;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod regions;
pub mod ui;

pub use error::{Result, SnipError};
