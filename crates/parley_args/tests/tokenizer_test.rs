//! Tests for quote-aware argument tokenization.

use parley_args::{
    QuotePairTable, QuoteTokenizer, first_argument, require_arguments, split_arguments,
};
use parley_error::ArgsErrorKind;

fn step(value: &str) -> (&str, &str) {
    let result = QuoteTokenizer::new().next(value).unwrap();
    (result.token, result.remainder)
}

#[test]
fn test_empty_input_fails() {
    let err = first_argument("").unwrap_err();
    assert_eq!(err.kind(), ArgsErrorKind::EmptyInput);
}

#[test]
fn test_double_quoted_token() {
    assert_eq!(step("\"hello world\" rest"), ("hello world", "rest"));
}

#[test]
fn test_whitespace_split() {
    assert_eq!(step("hello world"), ("hello", "world"));
    assert_eq!(step("hello"), ("hello", ""));
}

#[test]
fn test_guillemets() {
    assert_eq!(step("«bonjour» le monde"), ("bonjour", "le monde"));
}

#[test]
fn test_unterminated_quote_falls_back_to_whitespace() {
    assert_eq!(step("\"unterminated rest"), ("\"unterminated", "rest"));
    assert_eq!(step("「unterminated"), ("「unterminated", ""));
}

#[test]
fn test_quote_needs_its_own_closer() {
    // “ closes only with ”, so the ASCII quote is ordinary text here.
    assert_eq!(step("“mixed\" quotes"), ("“mixed\"", "quotes"));
    assert_eq!(step("“curly” tail"), ("curly", "tail"));
    assert_eq!(step("‚low‛ x"), ("low", "x"));
}

#[test]
fn test_every_pair_groups_whitespace() {
    for (open, close) in QuotePairTable::global().pairs() {
        let input = format!("{open}a b{close}  c");
        assert_eq!(step(&input), ("a b", "c"), "pair {open}{close}");
    }
}

#[test]
fn test_quoted_token_directly_followed_by_text() {
    assert_eq!(step("'one'two three"), ("one", "two three"));
}

#[test]
fn test_feeding_remainder_back() {
    let mut value = "say 'hi there' to «the crowd» now";
    let mut tokens = Vec::new();
    while !value.is_empty() {
        let result = first_argument(value).unwrap();
        tokens.push(result.token);
        value = result.remainder;
    }
    assert_eq!(tokens, vec!["say", "hi there", "to", "the crowd", "now"]);
    assert_eq!(tokens, split_arguments("say 'hi there' to «the crowd» now"));
}

#[test]
fn test_split_empty_and_blank_input() {
    assert!(split_arguments("").is_empty());
    assert!(split_arguments("   ").is_empty());
}

#[test]
fn test_require_arguments_rejects_blank_input() {
    for blank in ["", "   ", "\t "] {
        let err = require_arguments(blank).unwrap_err();
        assert_eq!(err.kind(), ArgsErrorKind::EmptyInput);
    }
}

#[test]
fn test_require_arguments_matches_split() {
    let value = "  say 'hi there'   to «the crowd»  ";
    assert_eq!(require_arguments(value).unwrap(), split_arguments(value));
    assert_eq!(require_arguments(value).unwrap(), vec!["say", "hi there", "to", "the crowd"]);
}
