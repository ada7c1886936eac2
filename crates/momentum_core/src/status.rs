//! Workflow status published by the orchestrator.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Phase of the generation workflow.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    strum::Display,
)]
pub enum WorkflowPhase {
    /// No run in progress.
    #[default]
    Idle,
    /// Waiting on script generation.
    Scripting,
    /// Generating slide images.
    Visualizing,
    /// Run finished; all slide attempts resolved.
    Completed,
    /// Script generation failed; no feed was produced.
    Failed,
}

impl WorkflowPhase {
    /// True for the two terminal phases.
    pub fn is_terminal(self) -> bool {
        matches!(self, WorkflowPhase::Completed | WorkflowPhase::Failed)
    }

    /// True while a run is actively generating.
    pub fn is_busy(self) -> bool {
        matches!(self, WorkflowPhase::Scripting | WorkflowPhase::Visualizing)
    }
}

/// Progress snapshot for the active run.
///
/// Single-writer (the orchestrator), read by any number of subscribers.
/// `progress` is a percentage in `[0, 100]`, monotonically non-decreasing
/// within one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, Getters)]
pub struct WorkflowStatus {
    /// Current workflow phase.
    phase: WorkflowPhase,
    /// Human-readable status line.
    message: String,
    /// Percentage complete, 0 to 100.
    progress: f32,
}

impl WorkflowStatus {
    /// Create a status snapshot.
    pub fn new(phase: WorkflowPhase, message: impl Into<String>, progress: f32) -> Self {
        Self {
            phase,
            message: message.into(),
            progress,
        }
    }

    /// The cleared, idle status.
    pub fn idle() -> Self {
        Self::default()
    }

    /// True while a run is actively generating.
    pub fn is_busy(&self) -> bool {
        self.phase.is_busy()
    }
}
