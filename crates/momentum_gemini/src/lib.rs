//! Gemini API clients for the Momentum feed generator.
//!
//! This crate speaks the Gemini `generateContent` REST wire format directly
//! through typed DTOs:
//! - [`GeminiScriptWriter`] requests structured JSON output for narrative
//!   scripts, with bounded retry on transient transport failures
//! - [`GeminiImageMaker`] requests one inline image per slide prompt, with no
//!   retry (a failed slide attempt is final for that run)
//!
//! Both clients share [`GeminiClient`], a thin HTTP core that owns the API
//! key and maps non-success statuses onto the error taxonomy.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod extraction;
mod image;
mod script;
mod wire;

pub use client::GeminiClient;
pub use extraction::extract_json;
pub use image::{GeminiImageMaker, IMAGE_MODEL};
pub use script::{GeminiScriptWriter, SCRIPT_MODEL, parse_script_response};
pub use wire::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    ImageConfig, InlineData, Part,
};

/// Result type for Gemini operations.
pub type GeminiResult<T> = Result<T, momentum_error::GeminiError>;
