pub mod commands;
pub mod context;
pub mod logging;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Inspect an OpenPGP public key before you trust it.
#[derive(Parser, Debug)]
#[command(name = "keyprofile", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to alternative config file
    #[arg(long, global = true, env = "KEYPROFILE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the profile as JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the full profile of an armored public key
    Inspect {
        /// Key file to read ("-" or omitted: stdin)
        file: Option<String>,
    },

    /// List the identity-proof claims attached to a key
    Claims {
        /// Key file to read ("-" or omitted: stdin)
        file: Option<String>,
    },

    /// Read a stream of pasted key blocks and show the last one
    Paste,
}
