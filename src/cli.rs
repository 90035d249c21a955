//! Command-line argument parsing for the scanner CLI
//!
//! The library core has no CLI surface; this binary is a development tool
//! that scans files and reports every color literal found.

use std::path::PathBuf;

use clap::Parser;

/// Scan files for inline color literals
#[derive(Parser, Debug)]
#[command(name = "swatch", version, about = "Scan files for inline color literals")]
pub struct CliArgs {
    /// Files to scan
    #[arg(value_name = "PATHS", required = true)]
    pub paths: Vec<PathBuf>,

    /// Suppress the ANSI color preview block
    #[arg(long)]
    pub no_color: bool,
}
