//! Quote-aware command argument tokenizer.
//!
//! Bot commands arrive as a single string. [`QuoteTokenizer::next`] takes one token
//! from the head of that string and returns the trimmed remainder, treating text
//! between any of sixteen quotation mark pairs (ASCII, typographic and CJK) as a
//! single token.
//!
//! ```
//! use parley_args::split_arguments;
//!
//! assert_eq!(
//!     split_arguments(r#"kick "Some User" 「長い 理由」"#),
//!     vec!["kick", "Some User", "長い 理由"]
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod quotes;
mod tokenizer;

pub use quotes::QuotePairTable;
pub use tokenizer::{
    Arguments, QuoteTokenizer, TokenizeResult, first_argument, require_arguments, split_arguments,
};
