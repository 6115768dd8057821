//! Argument tokenizer error types.

/// Specific error conditions for argument tokenization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ArgsErrorKind {
    /// Tokenizer was handed an empty string
    #[display("Cannot take an argument from empty input")]
    EmptyInput,
}

/// Error type for argument tokenization.
///
/// # Examples
///
/// ```
/// use parley_error::{ArgsError, ArgsErrorKind};
///
/// let err = ArgsError::new(ArgsErrorKind::EmptyInput);
/// assert!(format!("{}", err).contains("empty input"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Args Error: {} at line {} in {}", kind, line, file)]
pub struct ArgsError {
    /// The specific error condition
    pub kind: ArgsErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ArgsError {
    /// Create a new ArgsError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ArgsErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> ArgsErrorKind {
        self.kind
    }
}

/// Result type for argument tokenization.
pub type ArgsResult<T> = std::result::Result<T, ArgsError>;
