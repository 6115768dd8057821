//! Driving pattern rules over message content.

use crate::{MatchResult, PatternKind, PatternRule, PatternTable, ScanResult};
use parley_error::LexerResult;
use tracing::{debug, instrument, trace};

/// Scans message content for mentions and markup.
///
/// The scanner holds no mutable state. Each scan owns its own cursor, so repeated
/// and concurrent scans of the same kind never observe each other.
///
/// # Examples
///
/// ```
/// use parley_lexer::{ContentScanner, MatchFields, PatternKind};
///
/// let scanner = ContentScanner::new();
/// let result = scanner.scan(PatternKind::MentionUser, "hi <@!42> and <@7>", false);
///
/// assert_eq!(result.len(), 2);
/// assert_eq!(
///     result.matches()[0].fields(),
///     &MatchFields::MentionUser { id: "42".into(), mention_type: "!".into() }
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ContentScanner {
    table: &'static PatternTable,
}

impl ContentScanner {
    /// Create a scanner over the global pattern table.
    pub fn new() -> Self {
        Self {
            table: PatternTable::global(),
        }
    }

    /// Scan `content` for `kind`.
    ///
    /// With `first_only` the result holds at most one match, the same one a full
    /// scan would return first.
    #[instrument(skip(self, content), fields(content_len = content.len()))]
    pub fn scan(&self, kind: PatternKind, content: &str, first_only: bool) -> ScanResult {
        let matches = self.matches(kind, content);
        let matches: Vec<_> = if first_only {
            matches.take(1).collect()
        } else {
            matches.collect()
        };
        debug!(match_count = matches.len(), "Scan complete");
        ScanResult::new(kind, matches)
    }

    /// Scan for a kind named by a raw, case-insensitive identifier.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPatternKind` before scanning if the identifier names no kind.
    #[track_caller]
    pub fn scan_str(&self, kind: &str, content: &str, first_only: bool) -> LexerResult<ScanResult> {
        let kind = PatternKind::parse(kind)?;
        Ok(self.scan(kind, content, first_only))
    }

    /// Scan for several kinds, returning one result per kind in the order given.
    pub fn scan_many<I>(&self, kinds: I, content: &str, first_only: bool) -> Vec<ScanResult>
    where
        I: IntoIterator<Item = PatternKind>,
    {
        kinds
            .into_iter()
            .map(|kind| self.scan(kind, content, first_only))
            .collect()
    }

    /// Lazily iterate over the matches of `kind` in `content`.
    pub fn matches<'c>(&self, kind: PatternKind, content: &'c str) -> Matches<'static, 'c> {
        Matches::new(self.table.rule(kind), content)
    }
}

impl Default for ContentScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over successive non-overlapping matches of one rule.
///
/// The cursor is a byte offset into the content, starting at zero for every new
/// iterator.
#[derive(Debug, Clone)]
pub struct Matches<'r, 'c> {
    rule: &'r PatternRule,
    content: &'c str,
    cursor: usize,
}

impl<'r, 'c> Matches<'r, 'c> {
    /// Start a scan of `content` at offset zero.
    pub fn new(rule: &'r PatternRule, content: &'c str) -> Self {
        Self {
            rule,
            content,
            cursor: 0,
        }
    }

    /// Byte offset the next search starts from.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = MatchResult;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor > self.content.len() {
            return None;
        }
        let caps = self.rule.regex().captures_at(self.content, self.cursor)?;
        let whole = caps.get(0)?;

        // Step past empty matches so the scan always makes progress.
        self.cursor = if whole.is_empty() {
            self.content[whole.end()..]
                .chars()
                .next()
                .map_or(self.content.len() + 1, |c| whole.end() + c.len_utf8())
        } else {
            whole.end()
        };

        let result = self.rule.extract(&caps, self.content)?;
        trace!(kind = %result.kind(), span = ?result.span(), "Matched");
        Some(result)
    }
}

/// Scan `content` for the kind named by `kind` using the global table.
///
/// # Errors
///
/// Returns `UnknownPatternKind` if `kind` names no pattern.
///
/// # Examples
///
/// ```
/// use parley_lexer::scan;
///
/// let result = scan("emoji", "<a:wave:12345>", false).unwrap();
/// assert_eq!(result.len(), 1);
/// assert!(scan("blink", "", false).is_err());
/// ```
#[track_caller]
pub fn scan(kind: &str, content: &str, first_only: bool) -> LexerResult<ScanResult> {
    ContentScanner::new().scan_str(kind, content, first_only)
}
