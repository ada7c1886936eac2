//! Core data types for the Momentum feed generator.
//!
//! This crate provides the foundation data types used across the Momentum
//! workspace: the generation request, the slide/feed model, workflow status,
//! the prompt builder, and export formatting helpers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod export;
mod feed;
mod media;
pub mod prompt;
mod request;
mod script;
mod slide;
mod status;
mod style;

pub use feed::Feed;
pub use media::ImageResource;
pub use request::{GenerationRequest, GenerationRequestBuilder, MAX_SLIDE_COUNT};
pub use script::{ScriptDraft, SlideDraft};
pub use slide::Slide;
pub use status::{WorkflowPhase, WorkflowStatus};
pub use style::{AspectRatio, VisualStyle};
