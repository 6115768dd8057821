//! Mention and markup scanner for Discord-flavoured message content.
//!
//! The crate recognises fifteen grammars, from custom emoji and user mentions to
//! fenced code blocks and bare URLs, and extracts their payloads as structured
//! [`MatchResult`]s.
//!
//! # Architecture
//!
//! - [`PatternKind`] - closed set of grammar identifiers
//! - [`PatternTable`] - compiled once, maps every kind to its [`PatternRule`]
//! - [`ContentScanner`] - drives a rule over content, first match or all matches
//!
//! Rules are immutable and the scan cursor belongs to each scan, so the table is
//! shared freely between threads.
//!
//! # Example
//!
//! ```
//! use parley_lexer::{ContentScanner, MatchFields, PatternKind};
//!
//! let result = ContentScanner::new().scan(
//!     PatternKind::TextCodeblock,
//!     "```js\nconsole.log(1)\n```",
//!     false,
//! );
//!
//! assert_eq!(
//!     result.matches()[0].fields(),
//!     &MatchFields::Codeblock {
//!         language: Some("js".into()),
//!         text: "console.log(1)".into(),
//!     }
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod kind;
mod matched;
mod rule;
mod scanner;

pub use kind::PatternKind;
pub use matched::{MatchFields, MatchResult, ScanResult};
pub use rule::{Extractor, PatternRule, PatternTable};
pub use scanner::{ContentScanner, Matches, scan};
