//! Quotation mark pairs recognised by the tokenizer.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Opening quote and the closing quote it must be paired with.
const QUOTE_PAIRS: [(char, char); 16] = [
    ('"', '"'),
    ('\'', '\''),
    ('‚', '‛'),
    ('“', '”'),
    ('„', '‟'),
    ('「', '」'),
    ('『', '』'),
    ('〝', '〞'),
    ('﹁', '﹂'),
    ('﹃', '﹄'),
    ('＂', '＂'),
    ('＇', '＇'),
    ('｢', '｣'),
    ('«', '»'),
    ('《', '》'),
    ('〈', '〉'),
];

static TABLE: LazyLock<QuotePairTable> = LazyLock::new(QuotePairTable::new);

/// Bidirectional opener/closer lookup over the fixed quote pairs.
///
/// Pairing is by exact character: `“` closes only with `”`, never with `"`.
///
/// # Examples
///
/// ```
/// use parley_args::QuotePairTable;
///
/// let quotes = QuotePairTable::global();
/// assert_eq!(quotes.closer_for('«'), Some('»'));
/// assert_eq!(quotes.opener_for('」'), Some('「'));
/// assert_eq!(quotes.closer_for('»'), None);
/// ```
#[derive(Debug)]
pub struct QuotePairTable {
    closers: HashMap<char, char>,
    openers: HashMap<char, char>,
}

impl QuotePairTable {
    fn new() -> Self {
        Self {
            closers: QUOTE_PAIRS.iter().copied().collect(),
            openers: QUOTE_PAIRS.iter().map(|&(open, close)| (close, open)).collect(),
        }
    }

    /// The process-wide table.
    pub fn global() -> &'static QuotePairTable {
        &TABLE
    }

    /// Closing character for an opening quote.
    pub fn closer_for(&self, opener: char) -> Option<char> {
        self.closers.get(&opener).copied()
    }

    /// Opening character for a closing quote.
    pub fn opener_for(&self, closer: char) -> Option<char> {
        self.openers.get(&closer).copied()
    }

    /// True if `c` starts a quoted token.
    pub fn is_opener(&self, c: char) -> bool {
        self.closers.contains_key(&c)
    }

    /// True if `c` ends a quoted token.
    pub fn is_closer(&self, c: char) -> bool {
        self.openers.contains_key(&c)
    }

    /// All pairs in a fixed order.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> {
        QUOTE_PAIRS.iter().copied()
    }
}
