//! Generation orchestration engine for Momentum.
//!
//! [`FeedEngine`] sequences one generation run: script generation first,
//! then one image attempt per slide in ascending order, publishing a full
//! immutable feed snapshot after every attempt. A failed image attempt
//! leaves its slide imageless and the run continues; only a scripting
//! failure aborts the run. Starting a new run supersedes any run still in
//! flight; the superseded run's late writes are discarded by a
//! generation-token check before every mutation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod store;

pub use engine::{EngineConfig, FeedEngine, RunOutcome};
