//! Structured results of a content scan.

use crate::PatternKind;
use derive_getters::Getters;
use serde::Serialize;
use std::ops::Range;

/// Kind-specific fields extracted from one match.
///
/// Fields never include the delimiters of the grammar (backticks, asterisks,
/// angle brackets and so on).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum MatchFields {
    /// Custom emoji reference
    Emoji {
        /// Emoji name
        name: String,
        /// Emoji snowflake
        id: String,
        /// True when the scanned content starts with `<a`.
        ///
        /// This is a property of the whole content, not of the individual match:
        /// every emoji found in content that starts with `<a` is flagged, including
        /// static ones further along and content opening with some other `<a` tag.
        animated: bool,
    },
    /// Link to a channel
    JumpChannel {
        /// Guild snowflake, or `@me` for direct messages
        guild_id: String,
        /// Channel snowflake
        channel_id: String,
    },
    /// Link to a message
    JumpChannelMessage {
        /// Guild snowflake, or `@me` for direct messages
        guild_id: String,
        /// Channel snowflake
        channel_id: String,
        /// Message snowflake
        message_id: String,
    },
    /// Channel or role mention
    Mention {
        /// Mentioned snowflake
        id: String,
    },
    /// User mention
    MentionUser {
        /// Mentioned user snowflake
        id: String,
        /// Nickname marker, either empty or `!`
        mention_type: String,
    },
    /// Fenced code block
    Codeblock {
        /// Language tag on the opening fence
        #[serde(skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        /// Block body without surrounding blank lines
        text: String,
    },
    /// Inner text of a text-markup span
    Text {
        /// Text between the delimiters
        text: String,
    },
}

impl MatchFields {
    /// The `text` payload of text-markup and code block matches.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Codeblock { text, .. } | Self::Text { text } => Some(text.as_str()),
            _ => None,
        }
    }

    /// The `id` payload of emoji and mention matches.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Emoji { id, .. } | Self::Mention { id } | Self::MentionUser { id, .. } => {
                Some(id.as_str())
            }
            _ => None,
        }
    }
}

/// One successful match of a pattern against scanned content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Pattern that produced the match
    kind: PatternKind,
    /// Exact substring consumed by the match
    matched_text: String,
    /// Byte offset of `matched_text` in the scanned content
    #[serde(skip)]
    start: usize,
    /// Extracted fields
    #[serde(flatten)]
    fields: MatchFields,
}

impl MatchResult {
    pub(crate) fn new(
        kind: PatternKind,
        matched_text: impl Into<String>,
        start: usize,
        fields: MatchFields,
    ) -> Self {
        Self {
            kind,
            matched_text: matched_text.into(),
            start,
            fields,
        }
    }

    /// Byte range of the match in the scanned content.
    pub fn span(&self) -> Range<usize> {
        self.start..self.start + self.matched_text.len()
    }
}

/// All matches of one pattern kind, in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ScanResult {
    /// Pattern that was scanned for
    kind: PatternKind,
    /// Matches in order of appearance; empty when nothing matched
    matches: Vec<MatchResult>,
}

impl ScanResult {
    pub(crate) fn new(kind: PatternKind, matches: Vec<MatchResult>) -> Self {
        Self { kind, matches }
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// First match, if any.
    pub fn first(&self) -> Option<&MatchResult> {
        self.matches.first()
    }

    /// Consume the result, returning the matches.
    pub fn into_matches(self) -> Vec<MatchResult> {
        self.matches
    }
}
