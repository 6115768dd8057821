//! Parley CLI binary.
//!
//! This binary provides command-line access to Parley's functionality:
//! - Scan message content for mentions and markup
//! - Split command strings into quote-aware arguments

use clap::Parser;
use parley::{LoggingConfig, ParleyConfig, init_logging};

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, handle_args, handle_scan, input_text, list_kinds};

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ParleyConfig::from_file(path)?,
        None => ParleyConfig::load()?,
    };

    // Initialize tracing
    let mut logging = LoggingConfig::new().with_json_logs(config.output.json_logs);
    if cli.verbose {
        logging = logging.with_log_level("debug");
    }
    init_logging(&logging)?;

    // Execute the requested command
    match cli.command {
        Commands::Scan {
            kinds,
            first,
            format,
            text,
        } => {
            let content = input_text(text)?;
            handle_scan(&kinds, first, format, &content, &config)?;
        }

        Commands::Args { format, text } => {
            let content = input_text(text)?;
            handle_args(format, &content, &config)?;
        }

        Commands::Kinds => list_kinds(),
    }

    Ok(())
}
