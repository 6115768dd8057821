//! Parley - chat message content parsing.
//!
//! Parley extracts mentions and markup from Discord-flavoured message content and
//! splits bot command strings into quote-aware arguments.
//!
//! # Quick Start
//!
//! ```
//! use parley::{ContentScanner, PatternKind, split_arguments};
//!
//! let result = ContentScanner::new().scan(PatternKind::MentionUser, "hey <@!42>", false);
//! assert_eq!(result.matches()[0].fields().id(), Some("42"));
//!
//! assert_eq!(split_arguments("ban “Some User” spam"), vec!["ban", "Some User", "spam"]);
//! ```
//!
//! # Architecture
//!
//! - `parley_error` - Error types
//! - `parley_lexer` - Pattern table and content scanner
//! - `parley_args` - Quote-aware argument tokenizer
//!
//! This crate re-exports everything and adds configuration, logging setup and the
//! `parley` command-line tool.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod logging;
mod report;

pub use parley_args::*;
pub use parley_error::*;
pub use parley_lexer::*;

pub use config::{OutputConfig, OutputFormat, ParleyConfig, ScanConfig};
pub use logging::{LoggingConfig, init_logging};
pub use report::{render_scans, render_tokens};
