//! Splitting the head argument off a command string.

use crate::QuotePairTable;
use parley_error::{ArgsError, ArgsErrorKind, ArgsResult};
use serde::Serialize;
use tracing::{instrument, trace};

/// One tokenization step: the head token and the rest of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenizeResult<'a> {
    /// Head token, without quote delimiters when it was quoted
    pub token: &'a str,
    /// Everything after the token, with leading whitespace removed
    pub remainder: &'a str,
}

/// Quote-aware tokenizer for command strings.
///
/// # Examples
///
/// ```
/// use parley_args::QuoteTokenizer;
///
/// let tokenizer = QuoteTokenizer::new();
/// let step = tokenizer.next("\"hello world\" rest").unwrap();
/// assert_eq!(step.token, "hello world");
/// assert_eq!(step.remainder, "rest");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct QuoteTokenizer {
    quotes: &'static QuotePairTable,
}

impl QuoteTokenizer {
    /// Create a tokenizer over the global quote table.
    pub fn new() -> Self {
        Self {
            quotes: QuotePairTable::global(),
        }
    }

    /// Take one token from the head of `value`.
    ///
    /// A head quote is honoured only if its own closer appears later in the
    /// string; otherwise the quote is an ordinary character and the token runs
    /// to the first space.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` if `value` is empty.
    #[track_caller]
    #[instrument(skip(self, value), fields(value_len = value.len()))]
    pub fn next<'a>(&self, value: &'a str) -> ArgsResult<TokenizeResult<'a>> {
        let mut chars = value.chars();
        let Some(first) = chars.next() else {
            return Err(ArgsError::new(ArgsErrorKind::EmptyInput));
        };
        let rest = chars.as_str();

        if let Some(closer) = self.quotes.closer_for(first)
            && let Some(index) = rest.find(closer)
        {
            trace!(opener = %first, "Quoted token");
            return Ok(TokenizeResult {
                token: &rest[..index],
                remainder: rest[index + closer.len_utf8()..].trim_start(),
            });
        }

        match rest.find(' ') {
            None => {
                trace!("Token runs to end of input");
                Ok(TokenizeResult {
                    token: value,
                    remainder: "",
                })
            }
            Some(index) => {
                trace!("Token ends at space");
                Ok(TokenizeResult {
                    token: &value[..first.len_utf8() + index],
                    remainder: rest[index..].trim_start(),
                })
            }
        }
    }

    /// Iterate over every token of `value`.
    pub fn arguments<'a>(&self, value: &'a str) -> Arguments<'a> {
        Arguments {
            tokenizer: *self,
            remainder: value.trim_start(),
        }
    }
}

impl Default for QuoteTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Successive tokens of a command string.
///
/// Leading whitespace of the input is skipped; iteration ends when the remainder
/// is empty, so empty input yields nothing rather than an error.
#[derive(Debug, Clone)]
pub struct Arguments<'a> {
    tokenizer: QuoteTokenizer,
    remainder: &'a str,
}

impl<'a> Arguments<'a> {
    /// Input not yet consumed.
    pub fn remainder(&self) -> &'a str {
        self.remainder
    }
}

impl<'a> Iterator for Arguments<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remainder.is_empty() {
            return None;
        }
        let step = self.tokenizer.next(self.remainder).ok()?;
        self.remainder = step.remainder;
        Some(step.token)
    }
}

/// Take one token from the head of `value`.
///
/// # Errors
///
/// Returns `EmptyInput` if `value` is empty.
///
/// # Examples
///
/// ```
/// use parley_args::first_argument;
///
/// let step = first_argument("«bonjour» le monde").unwrap();
/// assert_eq!((step.token, step.remainder), ("bonjour", "le monde"));
/// assert!(first_argument("").is_err());
/// ```
#[track_caller]
pub fn first_argument(value: &str) -> ArgsResult<TokenizeResult<'_>> {
    QuoteTokenizer::new().next(value)
}

/// Split `value` into all of its tokens.
///
/// # Examples
///
/// ```
/// use parley_args::split_arguments;
///
/// assert_eq!(split_arguments("ban “bad user” spam"), vec!["ban", "bad user", "spam"]);
/// ```
pub fn split_arguments(value: &str) -> Vec<&str> {
    QuoteTokenizer::new().arguments(value).collect()
}

/// Split `value` into all of its tokens, requiring at least one.
///
/// # Errors
///
/// Returns `EmptyInput` if `value` is empty or only whitespace.
///
/// # Examples
///
/// ```
/// use parley_args::require_arguments;
///
/// assert_eq!(require_arguments(" roll 2d6 ").unwrap(), vec!["roll", "2d6"]);
/// assert!(require_arguments("  ").is_err());
/// ```
#[track_caller]
pub fn require_arguments(value: &str) -> ArgsResult<Vec<&str>> {
    let tokens = split_arguments(value);
    if tokens.is_empty() {
        return Err(ArgsError::new(ArgsErrorKind::EmptyInput));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(value: &str) -> (&str, &str) {
        let result = first_argument(value).unwrap();
        (result.token, result.remainder)
    }

    #[test]
    fn test_single_character() {
        assert_eq!(step("a"), ("a", ""));
        assert_eq!(step("\""), ("\"", ""));
    }

    #[test]
    fn test_empty_quotes_yield_empty_token() {
        assert_eq!(step("\"\" next"), ("", "next"));
    }

    #[test]
    fn test_multibyte_unquoted_head() {
        assert_eq!(step("héllo wörld"), ("héllo", "wörld"));
        assert_eq!(step("»x y"), ("»x", "y"));
    }

    #[test]
    fn test_remainder_keeps_trailing_whitespace() {
        assert_eq!(step("a   b  "), ("a", "b  "));
    }

    #[test]
    fn test_arguments_skips_leading_whitespace() {
        let mut args = QuoteTokenizer::new().arguments("  one 'two three'");
        assert_eq!(args.next(), Some("one"));
        assert_eq!(args.remainder(), "'two three'");
        assert_eq!(args.next(), Some("two three"));
        assert_eq!(args.next(), None);
    }
}
