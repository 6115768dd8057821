//! Top-level error wrapper types.

use crate::{ArgsError, ConfigError, LexerError, OutputError};

/// Every failure a Parley operation can surface.
///
/// # Examples
///
/// ```
/// use parley_error::{ArgsError, ArgsErrorKind, ParleyErrorKind};
///
/// let kind: ParleyErrorKind = ArgsError::new(ArgsErrorKind::EmptyInput).into();
/// assert!(format!("{}", kind).contains("Args Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum ParleyErrorKind {
    /// Content scanning error
    #[from(LexerError)]
    Lexer(LexerError),
    /// Argument tokenization error
    #[from(ArgsError)]
    Args(ArgsError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Input or output error
    #[from(OutputError)]
    Output(OutputError),
}

/// Parley error with kind discrimination.
///
/// # Examples
///
/// ```
/// use parley_error::{ConfigError, ConfigErrorKind, ParleyResult};
///
/// fn might_fail() -> ParleyResult<()> {
///     Err(ConfigError::new(ConfigErrorKind::Parse("missing field".into())))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Parley Error: {}", _0)]
pub struct ParleyError(Box<ParleyErrorKind>);

impl ParleyError {
    /// Create a new error from a kind.
    pub fn new(kind: ParleyErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ParleyErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to ParleyErrorKind
impl<T> From<T> for ParleyError
where
    T: Into<ParleyErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Parley operations.
pub type ParleyResult<T> = std::result::Result<T, ParleyError>;
