//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::check::{DEFAULT_PRIMARY_EXT, DEFAULT_SECONDARY_EXT, DEFAULT_SOURCE_DIR};

/// snipcheck - Keep paired sample files' snippet regions in sync.
#[derive(Debug, Parser)]
#[command(name = "snipcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory to search for source folders (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Only print errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Check settings used when no subcommand is given
    #[command(flatten)]
    pub check: CheckArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check snippet regions (default if no command specified)
    ///
    /// Check flags given before `check` are ignored in favor of the ones after it.
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Extension of primary-language samples
    #[arg(long, env = "SNIPCHECK_PRIMARY_EXT", default_value = DEFAULT_PRIMARY_EXT)]
    pub primary_ext: String,

    /// Extension of secondary-language samples
    #[arg(long, env = "SNIPCHECK_SECONDARY_EXT", default_value = DEFAULT_SECONDARY_EXT)]
    pub secondary_ext: String,

    /// Name (glob) of the folders holding paired samples
    #[arg(long, env = "SNIPCHECK_SOURCE_DIR", default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: String,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            primary_ext: DEFAULT_PRIMARY_EXT.to_string(),
            secondary_ext: DEFAULT_SECONDARY_EXT.to_string(),
            source_dir: DEFAULT_SOURCE_DIR.to_string(),
        }
    }
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
