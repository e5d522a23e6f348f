//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Section-level rewriting for Vue single-file components.
#[derive(Debug, Parser)]
#[command(name = "sfc-rewrite")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Project root
    #[arg(long, default_value = ".")]
    pub root: Utf8PathBuf,

    /// Glob patterns selecting files to process (repeatable)
    #[arg(long = "include", default_value = "src/**/*.vue")]
    pub includes: Vec<String>,

    /// Glob patterns excluding files (repeatable)
    #[arg(long = "exclude", default_value = "node_modules/**/*")]
    pub excludes: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// What to do with the matched files.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Reparse and reserialize matching files
    Normalize {
        /// Write results back to the files instead of printing to stdout
        #[arg(long)]
        write: bool,

        /// Mirror the rewritten output under this root-relative directory
        #[arg(long = "debug-path")]
        debug_path: Option<Utf8PathBuf>,
    },

    /// Print each file's component dependency map as JSON
    Deps,
}
