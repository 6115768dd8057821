//! Content lexer error types.

/// Specific error conditions for content scanning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum LexerErrorKind {
    /// The requested pattern kind is not registered
    #[display("Unknown pattern kind: {}", _0)]
    UnknownPatternKind(String),
}

/// Error type for content scanning.
///
/// # Examples
///
/// ```
/// use parley_error::{LexerError, LexerErrorKind};
///
/// let err = LexerError::new(LexerErrorKind::UnknownPatternKind("BLINK".into()));
/// assert!(format!("{}", err).contains("BLINK"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Lexer Error: {} at line {} in {}", kind, line, file)]
pub struct LexerError {
    /// The specific error condition
    pub kind: LexerErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl LexerError {
    /// Create a new LexerError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LexerErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LexerErrorKind {
        &self.kind
    }
}

/// Result type for content scanning.
pub type LexerResult<T> = std::result::Result<T, LexerError>;
