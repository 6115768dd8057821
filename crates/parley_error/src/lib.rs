//! Error types for the Parley chat content lexer.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! Library code never logs these before returning them; reporting is left to the caller.
//!
//! # Examples
//!
//! ```
//! use parley_error::{ArgsError, ArgsErrorKind, ParleyResult};
//!
//! fn first_argument(value: &str) -> ParleyResult<&str> {
//!     if value.is_empty() {
//!         Err(ArgsError::new(ArgsErrorKind::EmptyInput))?
//!     }
//!     Ok(value)
//! }
//!
//! assert!(first_argument("").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod args;
mod config;
mod error;
mod lexer;
mod output;

pub use args::{ArgsError, ArgsErrorKind, ArgsResult};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{ParleyError, ParleyErrorKind, ParleyResult};
pub use lexer::{LexerError, LexerErrorKind, LexerResult};
pub use output::{OutputError, OutputErrorKind};
