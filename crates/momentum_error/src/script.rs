//! Script generation error types.

/// Specific error conditions for script generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ScriptErrorKind {
    /// Model output could not be parsed into the requested schema
    #[display("Malformed script response: {}", _0)]
    MalformedResponse(String),
    /// Model returned a different number of slides than requested
    #[display("Expected {} slides but the response contained {}", requested, returned)]
    SlideCountMismatch {
        /// Slide count the prompt asked for
        requested: usize,
        /// Slide count the response contained
        returned: usize,
    },
}

/// Error type for script generation.
///
/// # Examples
///
/// ```
/// use momentum_error::{ScriptError, ScriptErrorKind};
///
/// let err = ScriptError::new(ScriptErrorKind::MalformedResponse(
///     "expected value at line 1".to_string(),
/// ));
/// assert!(format!("{}", err).contains("Malformed script response"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Script Error: {} at line {} in {}", kind, line, file)]
pub struct ScriptError {
    /// The specific error condition
    pub kind: ScriptErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ScriptError {
    /// Create a new ScriptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ScriptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
