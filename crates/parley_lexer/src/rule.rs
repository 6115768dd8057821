//! Pattern rules and the static rule table.

use crate::{MatchFields, MatchResult, PatternKind};
use parley_error::LexerResult;
use regex::{Captures, Regex};
use std::fmt;
use std::sync::LazyLock;
use strum::IntoEnumIterator;
use tracing::debug;

/// Maps the capture groups of one match to kind-specific fields.
///
/// The second argument is the whole scanned content.
pub type Extractor = fn(&Captures<'_>, &str) -> MatchFields;

static TABLE: LazyLock<PatternTable> = LazyLock::new(PatternTable::new);

const JUMP_PREFIX: &str = r"^https?://(?:(?:canary|ptb)\.)?(?:discord|discordapp)\.com/channels/";

/// Regular expression source for a kind.
fn source(kind: PatternKind) -> String {
    match kind {
        PatternKind::Emoji => r"<a?:([A-Za-z0-9_]+):([0-9]+)>".to_string(),
        PatternKind::JumpChannel => format!(r"{JUMP_PREFIX}(@me|[0-9]+)/([0-9]+)$"),
        PatternKind::JumpChannelMessage => {
            format!(r"{JUMP_PREFIX}(@me|[0-9]+)/([0-9]+)/([0-9]+)$")
        }
        PatternKind::MentionChannel => r"<#([0-9]+)>".to_string(),
        PatternKind::MentionRole => r"<@&([0-9]+)>".to_string(),
        PatternKind::MentionUser => r"<@(!?)([0-9]+)>".to_string(),
        PatternKind::TextBold => r"(?s)\*\*(.+?)\*\*".to_string(),
        PatternKind::TextCodeblock => r"(?is)```(?:([a-z0-9-]+?)\n+)?\n*(.+?)\n*```".to_string(),
        PatternKind::TextCodestring => r"(?s)`(.+?)`".to_string(),
        PatternKind::TextItalics => r"(?s)_(.+?)_|\*(.+?)\*".to_string(),
        PatternKind::TextSnowflake => r"([0-9]+)".to_string(),
        PatternKind::TextSpoiler => r"(?s)\|\|(.+?)\|\|".to_string(),
        PatternKind::TextStrike => r"(?s)~~(.+?)~~".to_string(),
        PatternKind::TextUnderline => r"(?s)__(.+?)__".to_string(),
        PatternKind::TextUrl => r#"(https?://[^\s<]+[^<>.,:;!?"'\]\s])"#.to_string(),
    }
}

/// Extraction rule for a kind.
fn extractor(kind: PatternKind) -> Extractor {
    match kind {
        PatternKind::Emoji => |caps, content| MatchFields::Emoji {
            name: group(caps, 1),
            id: group(caps, 2),
            animated: content.starts_with("<a"),
        },
        PatternKind::JumpChannel => |caps, _| MatchFields::JumpChannel {
            guild_id: group(caps, 1),
            channel_id: group(caps, 2),
        },
        PatternKind::JumpChannelMessage => |caps, _| MatchFields::JumpChannelMessage {
            guild_id: group(caps, 1),
            channel_id: group(caps, 2),
            message_id: group(caps, 3),
        },
        PatternKind::MentionChannel | PatternKind::MentionRole => |caps, _| MatchFields::Mention {
            id: group(caps, 1),
        },
        PatternKind::MentionUser => |caps, _| MatchFields::MentionUser {
            id: group(caps, 2),
            mention_type: group(caps, 1),
        },
        PatternKind::TextCodeblock => |caps, _| MatchFields::Codeblock {
            language: caps.get(1).map(|m| m.as_str().to_string()),
            text: group(caps, 2),
        },
        PatternKind::TextItalics => |caps, _| MatchFields::Text {
            text: caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default(),
        },
        PatternKind::TextBold
        | PatternKind::TextCodestring
        | PatternKind::TextSnowflake
        | PatternKind::TextSpoiler
        | PatternKind::TextStrike
        | PatternKind::TextUnderline
        | PatternKind::TextUrl => |caps, _| MatchFields::Text {
            text: group(caps, 1),
        },
    }
}

fn group(caps: &Captures<'_>, index: usize) -> String {
    caps.get(index)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// A compiled pattern paired with its extraction rule.
///
/// Rules are immutable. The scan position lives with the caller, so one rule can be
/// shared by any number of concurrent scans.
pub struct PatternRule {
    kind: PatternKind,
    regex: Regex,
    extract: Extractor,
}

impl PatternRule {
    fn new(kind: PatternKind) -> Self {
        // Sources are fixed literals; failure to compile is a programming error.
        let regex = Regex::new(&source(kind)).expect("Valid pattern regex");
        Self {
            kind,
            regex,
            extract: extractor(kind),
        }
    }

    /// Kind this rule matches.
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Compiled expression.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Build a [`MatchResult`] from one set of captures over `content`.
    pub fn extract(&self, caps: &Captures<'_>, content: &str) -> Option<MatchResult> {
        let whole = caps.get(0)?;
        Some(MatchResult::new(
            self.kind,
            whole.as_str(),
            whole.start(),
            (self.extract)(caps, content),
        ))
    }
}

impl fmt::Debug for PatternRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PatternRule")
            .field("kind", &self.kind)
            .field("regex", &self.regex.as_str())
            .finish_non_exhaustive()
    }
}

/// Registry of every [`PatternKind`] and its [`PatternRule`].
///
/// # Examples
///
/// ```
/// use parley_lexer::{PatternKind, PatternTable};
///
/// let rule = PatternTable::global().rule_str("mention_role").unwrap();
/// assert_eq!(rule.kind(), PatternKind::MentionRole);
/// assert!(rule.regex().is_match("<@&99>"));
/// ```
#[derive(Debug)]
pub struct PatternTable {
    rules: Vec<PatternRule>,
}

impl PatternTable {
    fn new() -> Self {
        let rules: Vec<_> = PatternKind::iter().map(PatternRule::new).collect();
        debug!(rule_count = rules.len(), "Compiled pattern table");
        Self { rules }
    }

    /// The process-wide table, compiled on first use.
    pub fn global() -> &'static PatternTable {
        &TABLE
    }

    /// Rule for a kind.
    pub fn rule(&self, kind: PatternKind) -> &PatternRule {
        // Built from PatternKind::iter(), so the discriminant is the index.
        &self.rules[kind as usize]
    }

    /// Rule for a raw, case-insensitive identifier.
    ///
    /// # Errors
    ///
    /// Returns `UnknownPatternKind` if the identifier names no kind.
    #[track_caller]
    pub fn rule_str(&self, raw: &str) -> LexerResult<&PatternRule> {
        PatternKind::parse(raw).map(|kind| self.rule(kind))
    }

    /// Iterate over all rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &PatternRule> {
        self.rules.iter()
    }
}
