//! Stale-run suppression: a newer run owns the published state outright.

mod common;

use common::{GatedImages, draft, request};
use momentum_core::GenerationRequest;
use momentum_engine::{FeedEngine, RunOutcome};
use std::sync::Arc;

#[tokio::test]
async fn superseded_run_never_writes_into_the_new_feed() {
    // Run A's image prompts carry the "alpha" marker and block on the gate;
    // run B's "beta" prompts pass straight through.
    let images = Arc::new(GatedImages::new("alpha"));
    let entered = Arc::clone(&images.entered);
    let release = Arc::clone(&images.release);

    let engine = Arc::new(FeedEngine::new(
        SwitchingScript,
        Arc::clone(&images),
    ));

    let run_a = {
        let engine = Arc::clone(&engine);
        tokio::spawn(async move { engine.run(&request("alpha topic", 2)).await })
    };

    // Wait until run A is parked inside its first image attempt.
    entered.notified().await;

    // Run B start-to-finish while A is still mid-flight.
    let outcome_b = engine.run(&request("beta topic", 2)).await.unwrap();
    let feed_b = outcome_b.feed().expect("run B should complete").clone();

    // Release A; its late writes must be dropped.
    release.notify_one();
    let outcome_a = run_a.await.unwrap().unwrap();
    assert!(matches!(outcome_a, RunOutcome::Superseded));

    let published = engine.current_feed().expect("run B's feed stays active");
    assert_eq!(published.id(), feed_b.id());
    assert_eq!(published.topic(), "beta topic");
    assert!(
        published
            .slides()
            .iter()
            .all(|slide| slide.image_prompt().starts_with("beta")),
        "no slide from run A may appear in run B's feed"
    );
    assert!(published.slides().iter().all(|slide| slide.has_image()));
}

/// Script writer that tags drafts after the requested topic's first word, so
/// each run's slides are distinguishable.
struct SwitchingScript;

#[async_trait::async_trait]
impl momentum_interface::ScriptGenerator for SwitchingScript {
    async fn generate_script(
        &self,
        request: &GenerationRequest,
    ) -> momentum_error::MomentumResult<momentum_core::ScriptDraft> {
        tokio::task::yield_now().await;
        let tag = request.topic().split_whitespace().next().unwrap_or("run");
        Ok(draft(tag, *request.slide_count() as u32))
    }
}
