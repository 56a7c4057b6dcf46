//! Snippet region extraction.
//!
//! Source samples mark documentation snippets with comment tokens:
//!
//! ```text
//! // [START upload_file]
//! storageRef.putFile(file)
//! // [END upload_file]
//! ```
//!
//! This module turns a file into the set of region names it opens, after
//! checking that every opened region is also closed.
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use snipcheck::regions::scan_str;
//!
//! let content = "// [START upload_file]\nupload();\n// [END upload_file]\n";
//! let regions = scan_str(content, Path::new("Upload.java")).unwrap();
//! assert_eq!(regions.to_string(), "{upload_file}");
//!
//! // A region without an END marker is an error
//! assert!(scan_str("// [START dangling]\n", Path::new("Upload.java")).is_err());
//! ```

pub mod name;
pub mod scan;

pub use name::{RegionName, RegionSet};
pub use scan::{scan_file, scan_str, Markers};
