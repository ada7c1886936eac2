//! Single-writer snapshot store for the active feed and workflow status.

use momentum_core::{Feed, WorkflowStatus};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;

/// Identifies one generation run. Tokens increase monotonically; only the
/// newest token may publish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RunToken(u64);

/// Snapshot store backing the engine's observable state.
///
/// Readers subscribe to watch channels and always observe a fully-formed
/// snapshot (`Arc<Feed>`); the engine is the only writer. Every publish is
/// token-checked under the same lock that `begin_run` takes, so a superseded
/// run can never interleave a stale write into a newer run's state.
#[derive(Debug)]
pub(crate) struct SnapshotStore {
    active: Mutex<u64>,
    feed_tx: watch::Sender<Option<Arc<Feed>>>,
    status_tx: watch::Sender<WorkflowStatus>,
}

impl SnapshotStore {
    pub(crate) fn new() -> Self {
        let (feed_tx, _) = watch::channel(None);
        let (status_tx, _) = watch::channel(WorkflowStatus::idle());
        Self {
            active: Mutex::new(0),
            feed_tx,
            status_tx,
        }
    }

    /// Start a new run: supersede any run in flight and clear the previous
    /// feed.
    pub(crate) fn begin_run(&self) -> RunToken {
        let mut active = self.active.lock().unwrap();
        *active += 1;
        self.feed_tx.send_replace(None);
        RunToken(*active)
    }

    /// Publish a feed snapshot. Returns false (and publishes nothing) when
    /// the token's run has been superseded.
    pub(crate) fn publish_feed(&self, token: RunToken, feed: Arc<Feed>) -> bool {
        let active = self.active.lock().unwrap();
        if *active != token.0 {
            return false;
        }
        self.feed_tx.send_replace(Some(feed));
        true
    }

    /// Publish a status snapshot. Returns false (and publishes nothing) when
    /// the token's run has been superseded.
    pub(crate) fn publish_status(&self, token: RunToken, status: WorkflowStatus) -> bool {
        let active = self.active.lock().unwrap();
        if *active != token.0 {
            return false;
        }
        self.status_tx.send_replace(status);
        true
    }

    /// Clear the status back to idle, unless a newer run has started.
    pub(crate) fn reset_status_if_current(&self, token: RunToken) {
        let active = self.active.lock().unwrap();
        if *active == token.0 {
            self.status_tx.send_replace(WorkflowStatus::idle());
        }
    }

    pub(crate) fn subscribe_feed(&self) -> watch::Receiver<Option<Arc<Feed>>> {
        self.feed_tx.subscribe()
    }

    pub(crate) fn subscribe_status(&self) -> watch::Receiver<WorkflowStatus> {
        self.status_tx.subscribe()
    }

    pub(crate) fn current_feed(&self) -> Option<Arc<Feed>> {
        self.feed_tx.borrow().clone()
    }

    pub(crate) fn current_status(&self) -> WorkflowStatus {
        self.status_tx.borrow().clone()
    }
}
