//! Pattern kind identifiers.

use parley_error::{LexerError, LexerErrorKind, LexerResult};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// The markup and mention grammars the scanner recognises.
///
/// Canonical names are uppercase (`TEXT_CODEBLOCK`), but parsing accepts any case.
///
/// # Examples
///
/// ```
/// use parley_lexer::PatternKind;
///
/// let kind: PatternKind = "mention_user".parse().unwrap();
/// assert_eq!(kind, PatternKind::MentionUser);
/// assert_eq!(kind.to_string(), "MENTION_USER");
/// assert!("BLINK".parse::<PatternKind>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumCount,
    strum::IntoStaticStr,
    strum::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", try_from = "String")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PatternKind {
    /// Custom emoji reference, `<:name:id>` or `<a:name:id>`
    Emoji,
    /// Link to a channel, `https://discord.com/channels/guild/channel`
    JumpChannel,
    /// Link to a message, `https://discord.com/channels/guild/channel/message`
    JumpChannelMessage,
    /// Channel mention, `<#id>`
    MentionChannel,
    /// Role mention, `<@&id>`
    MentionRole,
    /// User mention, `<@id>` or nickname mention `<@!id>`
    MentionUser,
    /// `**bold**`
    TextBold,
    /// Fenced code block with optional language tag
    TextCodeblock,
    /// Inline `` `code` ``
    TextCodestring,
    /// `_italics_` or `*italics*`
    TextItalics,
    /// Any run of ASCII digits
    TextSnowflake,
    /// `||spoiler||`
    TextSpoiler,
    /// `~~strike~~`
    TextStrike,
    /// `__underline__`
    TextUnderline,
    /// Bare `http` or `https` URL
    TextUrl,
}

impl PatternKind {
    /// Canonical uppercase name.
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Resolve a caller-supplied identifier, ignoring ASCII case.
    #[track_caller]
    pub fn parse(raw: &str) -> LexerResult<Self> {
        Self::iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw))
            .ok_or_else(|| {
                LexerError::new(LexerErrorKind::UnknownPatternKind(raw.to_ascii_uppercase()))
            })
    }
}

impl FromStr for PatternKind {
    type Err = LexerError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PatternKind {
    type Error = LexerError;

    #[track_caller]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}
