//! Input and output error types for the command-line tool.

/// What went wrong moving text in or out.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OutputErrorKind {
    /// Reading input failed
    #[display("Failed to read input: {}", _0)]
    Read(String),
    /// Results could not be serialized
    #[display("Failed to serialize results: {}", _0)]
    Serialize(String),
}

/// Input/output error with source location.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Output Error: {} at line {} in {}", kind, line, file)]
pub struct OutputError {
    /// The specific error condition
    pub kind: OutputErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl OutputError {
    /// Create a new OutputError at the current location.
    #[track_caller]
    pub fn new(kind: OutputErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &OutputErrorKind {
        &self.kind
    }
}

impl From<std::io::Error> for OutputError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        OutputError::new(OutputErrorKind::Read(err.to_string()))
    }
}
