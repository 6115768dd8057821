//! CLI command definitions.

use clap::{Parser, Subcommand};
use parley::OutputFormat;
use std::path::PathBuf;

/// Parley - mention, markup and argument parsing for chat message content
#[derive(Parser, Debug)]
#[command(name = "parley")]
#[command(about = "Mention, markup and argument parsing for chat message content", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file to use instead of the default search path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan message content for mentions and markup
    Scan {
        /// Pattern kind to scan for (repeatable, case-insensitive)
        #[arg(short, long = "kind")]
        kinds: Vec<String>,

        /// Stop after the first match of each kind
        #[arg(long)]
        first: bool,

        /// Output format
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Message content; read from stdin when omitted
        text: Option<String>,
    },

    /// Split a command string into arguments
    Args {
        /// Output format
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Command string; read from stdin when omitted
        text: Option<String>,
    },

    /// List the recognised pattern kinds
    Kinds,
}
