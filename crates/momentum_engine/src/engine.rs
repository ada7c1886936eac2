//! The generation orchestrator.

use crate::store::{RunToken, SnapshotStore};
use momentum_core::{Feed, GenerationRequest, WorkflowPhase, WorkflowStatus};
use momentum_error::MomentumResult;
use momentum_interface::{ImageGenerator, ScriptGenerator};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const SCRIPTING_MESSAGE: &str = "Analyzing topic & engineering narrative bridges...";
const VISUALIZING_MESSAGE: &str = "Synthesizing viral aesthetics...";
const COMPLETED_MESSAGE: &str = "Momentum Engineered!";
const FAILED_MESSAGE: &str = "The engine stalled. Please try again.";

/// Timing knobs for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Delay before the status returns to idle after a completed run.
    pub completed_reset: Duration,
    /// Delay before the status returns to idle after a failed run.
    pub failed_reset: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            completed_reset: Duration::from_millis(1500),
            failed_reset: Duration::from_millis(3000),
        }
    }
}

/// How one `run` invocation ended.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    /// The run finished; every slide attempt resolved. The feed is the final
    /// published snapshot.
    Completed(Arc<Feed>),
    /// The topic was blank; no workflow started.
    NotStarted,
    /// A newer run started while this one was in flight; its remaining
    /// writes were discarded.
    Superseded,
}

impl RunOutcome {
    /// The final feed, when the run completed.
    pub fn feed(&self) -> Option<&Arc<Feed>> {
        match self {
            RunOutcome::Completed(feed) => Some(feed),
            _ => None,
        }
    }
}

/// Sequences script generation then per-slide image generation, publishing
/// progress and feed snapshots as it goes.
///
/// The engine owns the single active feed and status; any number of readers
/// may subscribe. Wrap it in an [`Arc`] to share it between the task driving
/// a run and the readers rendering snapshots.
///
/// # Examples
///
/// ```no_run
/// use momentum_core::GenerationRequest;
/// use momentum_engine::FeedEngine;
/// use momentum_gemini::{GeminiClient, GeminiImageMaker, GeminiScriptWriter};
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiClient::new()?;
/// let engine = FeedEngine::new(
///     GeminiScriptWriter::new(client.clone()),
///     GeminiImageMaker::new(client),
/// );
///
/// let request = GenerationRequest::builder()
///     .topic("The last telegram ever sent")
///     .slide_count(3u8)
///     .build()?;
/// let outcome = engine.run(&request).await?;
/// if let Some(feed) = outcome.feed() {
///     println!("{} slides, {} words", feed.slide_count(), feed.total_words());
/// }
/// # Ok(())
/// # }
/// ```
pub struct FeedEngine<S, I> {
    script: S,
    images: I,
    config: EngineConfig,
    store: Arc<SnapshotStore>,
}

impl<S, I> FeedEngine<S, I>
where
    S: ScriptGenerator,
    I: ImageGenerator,
{
    /// Create an engine with default timing.
    pub fn new(script: S, images: I) -> Self {
        Self::with_config(script, images, EngineConfig::default())
    }

    /// Create an engine with explicit timing.
    pub fn with_config(script: S, images: I, config: EngineConfig) -> Self {
        Self {
            script,
            images,
            config,
            store: Arc::new(SnapshotStore::new()),
        }
    }

    /// Subscribe to feed snapshots. The receiver observes every snapshot
    /// published while it keeps up, always fully formed.
    pub fn subscribe_feed(&self) -> tokio::sync::watch::Receiver<Option<Arc<Feed>>> {
        self.store.subscribe_feed()
    }

    /// Subscribe to workflow status updates.
    pub fn subscribe_status(&self) -> tokio::sync::watch::Receiver<WorkflowStatus> {
        self.store.subscribe_status()
    }

    /// The most recently published feed snapshot, if a run has committed one.
    pub fn current_feed(&self) -> Option<Arc<Feed>> {
        self.store.current_feed()
    }

    /// The most recently published status.
    pub fn current_status(&self) -> WorkflowStatus {
        self.store.current_status()
    }

    /// Execute one generation run.
    ///
    /// Blank topics are inert. Starting a run supersedes any run still in
    /// flight; the superseded invocation returns [`RunOutcome::Superseded`]
    /// without touching the newer run's state.
    ///
    /// # Errors
    ///
    /// Returns the script client's error when scripting fails; the engine
    /// records the Failed state first. Image failures never surface here;
    /// they are absorbed per slide.
    #[instrument(skip(self, request), fields(topic = %request.topic()))]
    pub async fn run(&self, request: &GenerationRequest) -> MomentumResult<RunOutcome> {
        if request.is_blank() {
            debug!("Blank topic, nothing to do");
            return Ok(RunOutcome::NotStarted);
        }

        let token = self.store.begin_run();
        let mut progress = 10.0;
        self.store.publish_status(
            token,
            WorkflowStatus::new(WorkflowPhase::Scripting, SCRIPTING_MESSAGE, progress),
        );

        let script = match self.script.generate_script(request).await {
            Ok(script) => script,
            Err(e) => {
                warn!(error = %e, "Script generation failed");
                self.store.publish_status(
                    token,
                    WorkflowStatus::new(WorkflowPhase::Failed, FAILED_MESSAGE, progress),
                );
                self.schedule_reset(token, self.config.failed_reset);
                return Err(e);
            }
        };

        let mut feed = Feed::new(request, script);
        let slide_total = feed.slide_count();

        if !self.store.publish_feed(token, Arc::new(feed.clone())) {
            debug!("Run superseded before the feed was committed");
            return Ok(RunOutcome::Superseded);
        }
        progress = 40.0;
        self.store.publish_status(
            token,
            WorkflowStatus::new(WorkflowPhase::Visualizing, VISUALIZING_MESSAGE, progress),
        );

        for index in 0..slide_total {
            progress = 40.0 + (index as f32 / slide_total as f32) * 55.0;
            let message = format!(
                "Visualizing {} frame {} of {}...",
                feed.aspect_ratio(),
                index + 1,
                slide_total
            );
            if !self.store.publish_status(
                token,
                WorkflowStatus::new(WorkflowPhase::Visualizing, message, progress),
            ) {
                debug!("Run superseded during visualization");
                return Ok(RunOutcome::Superseded);
            }

            let image_prompt = feed.slides()[index].image_prompt().clone();
            let image = match self
                .images
                .generate_slide_image(&image_prompt, *feed.style(), *feed.aspect_ratio())
                .await
            {
                Ok(image) => Some(image),
                Err(e) => {
                    warn!(error = %e, slide = index + 1, "Image generation failed, slide stays imageless");
                    None
                }
            };

            feed.resolve_slide(index, image);
            if !self.store.publish_feed(token, Arc::new(feed.clone())) {
                debug!("Run superseded during visualization");
                return Ok(RunOutcome::Superseded);
            }
        }

        self.store.publish_status(
            token,
            WorkflowStatus::new(WorkflowPhase::Completed, COMPLETED_MESSAGE, 100.0),
        );
        self.schedule_reset(token, self.config.completed_reset);
        Ok(RunOutcome::Completed(Arc::new(feed)))
    }

    /// Return the status to idle after the terminal display delay, unless a
    /// newer run has started by then.
    fn schedule_reset(&self, token: RunToken, delay: Duration) {
        let store = Arc::clone(&self.store);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            store.reset_status_if_current(token);
        });
    }
}
