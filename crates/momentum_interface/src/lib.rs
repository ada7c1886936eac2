//! Trait definitions for the Momentum feed generator.
//!
//! The external generative capability is modeled behind two narrow traits so
//! the orchestrator never depends on a concrete provider: a real client, a
//! recorded fixture, or a test stub all satisfy the same contract.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ImageGenerator, ScriptGenerator};
