//! Command-line argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Gatelist - inspect and bootstrap identity whitelists
#[derive(Parser, Debug)]
#[command(name = "gatelist", author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the whitelist file (overrides config)
    #[arg(long, env = "GATELIST_DIR", global = true)]
    pub dir: Option<PathBuf>,

    /// Whitelist file name (overrides config)
    #[arg(long, env = "GATELIST_FILE", global = true)]
    pub file_name: Option<String>,

    /// Trace every parsed line and log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the resolved whitelist path
    Path,
    /// Create the whitelist file from the default template
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Reload the whitelist and print its members
    List,
    /// Check whether an identity is whitelisted (exit status 1 if not)
    Check {
        /// Identity to look up
        identity: String,
    },
    /// Compare an older copy of the whitelist against the current file
    Diff {
        /// Path to the older whitelist file
        snapshot: PathBuf,
    },
}
