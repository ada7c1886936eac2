//! Unified interface for the Momentum feed generator.
//!
//! Momentum turns a topic and style preferences into a feed of narrative
//! slides: a Gemini-written script split into slides with hashtags, plus one
//! synthesized image per slide. This facade re-exports the public API of the
//! workspace crates.

#![forbid(unsafe_code)]

pub use momentum_core::{
    AspectRatio, Feed, GenerationRequest, GenerationRequestBuilder, ImageResource, ScriptDraft,
    Slide, SlideDraft, VisualStyle, WorkflowPhase, WorkflowStatus, export, prompt,
};
pub use momentum_engine::{EngineConfig, FeedEngine, RunOutcome};
pub use momentum_error::{
    ConfigError, GeminiError, GeminiErrorKind, MomentumError, MomentumErrorKind, MomentumResult,
    RetryableError, ScriptError, ScriptErrorKind,
};
pub use momentum_gemini::{
    GeminiClient, GeminiImageMaker, GeminiScriptWriter, IMAGE_MODEL, SCRIPT_MODEL,
};
pub use momentum_interface::{ImageGenerator, ScriptGenerator};
