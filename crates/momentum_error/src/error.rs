//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, ScriptError};

/// The foundation error enum for the Momentum workspace.
///
/// # Examples
///
/// ```
/// use momentum_error::{MomentumError, ConfigError};
///
/// let config_err = ConfigError::new("missing model identifier");
/// let err: MomentumError = config_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MomentumErrorKind {
    /// Gemini transport or decoding error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Script generation error
    #[from(ScriptError)]
    Script(ScriptError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Momentum error with kind discrimination.
///
/// # Examples
///
/// ```
/// use momentum_error::{MomentumResult, ConfigError};
///
/// fn might_fail() -> MomentumResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Momentum Error: {}", _0)]
pub struct MomentumError(Box<MomentumErrorKind>);

impl MomentumError {
    /// Create a new error from a kind.
    pub fn new(kind: MomentumErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MomentumErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MomentumErrorKind
impl<T> From<T> for MomentumError
where
    T: Into<MomentumErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Momentum operations.
///
/// # Examples
///
/// ```
/// use momentum_error::{MomentumResult, GeminiError, GeminiErrorKind};
///
/// fn fetch_script() -> MomentumResult<String> {
///     Err(GeminiError::new(GeminiErrorKind::MissingApiKey))?
/// }
/// ```
pub type MomentumResult<T> = std::result::Result<T, MomentumError>;
