//! Error types for the Momentum feed generator.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use momentum_error::{MomentumResult, ConfigError};
//!
//! fn load_settings() -> MomentumResult<String> {
//!     Err(ConfigError::new("missing model identifier"))?
//! }
//!
//! match load_settings() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod script;

pub use config::ConfigError;
pub use error::{MomentumError, MomentumErrorKind, MomentumResult};
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError};
pub use script::{ScriptError, ScriptErrorKind};
