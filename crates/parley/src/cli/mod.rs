//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the parley binary.

mod args;
mod commands;
mod scan;

pub use args::handle_args;
pub use commands::{Cli, Commands};
pub use scan::handle_scan;

use parley::{OutputError, ParleyResult, PatternKind};
use std::io::Read;
use strum::IntoEnumIterator;

/// Use `text` if given, otherwise read all of stdin.
pub fn input_text(text: Option<String>) -> ParleyResult<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(OutputError::from)?;
            Ok(buf)
        }
    }
}

/// Print every pattern kind, one per line.
pub fn list_kinds() {
    for kind in PatternKind::iter() {
        println!("{}", kind);
    }
}
