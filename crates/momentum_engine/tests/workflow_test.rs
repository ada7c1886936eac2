//! Engine workflow tests: feed construction, failure policy, progress.

mod common;

use common::{FailingScript, FixedScript, ScriptedImages, draft, request};
use momentum_core::{WorkflowPhase, WorkflowStatus};
use momentum_engine::{FeedEngine, RunOutcome};
use std::sync::{Arc, Mutex};

#[tokio::test]
async fn completed_run_matches_requested_slide_count() {
    let engine = FeedEngine::new(FixedScript(draft("a", 3)), ScriptedImages::new(vec![]));

    let outcome = engine.run(&request("Deep sea cables", 3)).await.unwrap();
    let feed = outcome.feed().expect("run should complete");

    assert_eq!(feed.slide_count(), 3);
    let numbers: Vec<u32> = feed.slides().iter().map(|s| *s.slide_number()).collect();
    assert_eq!(numbers, vec![1, 2, 3]);
    assert!(feed.slides().iter().all(|s| s.has_image()));
    assert!(feed.slides().iter().all(|s| !*s.image_pending()));
}

#[tokio::test]
async fn blank_topic_is_inert() {
    let engine = FeedEngine::new(FixedScript(draft("a", 1)), ScriptedImages::new(vec![]));

    let outcome = engine.run(&request("   ", 1)).await.unwrap();

    assert!(matches!(outcome, RunOutcome::NotStarted));
    assert!(engine.current_feed().is_none());
    assert_eq!(*engine.current_status().phase(), WorkflowPhase::Idle);
}

#[tokio::test]
async fn slide_failure_is_isolated_and_run_completes() {
    let engine = FeedEngine::new(
        FixedScript(draft("a", 3)),
        ScriptedImages::new(vec!["a-2"]),
    );

    let outcome = engine.run(&request("Volcanic winters", 3)).await.unwrap();
    let feed = outcome.feed().expect("run should complete despite slide 2");

    assert!(feed.slides()[0].has_image());
    assert!(!feed.slides()[1].has_image());
    assert!(feed.slides()[2].has_image());
    assert!(!*feed.slides()[1].image_pending());
    assert_eq!(*engine.current_status().phase(), WorkflowPhase::Completed);
}

#[tokio::test]
async fn image_attempts_run_in_ascending_slide_order() {
    let images = Arc::new(ScriptedImages::new(vec![]));
    let engine = FeedEngine::new(FixedScript(draft("a", 4)), Arc::clone(&images));

    engine.run(&request("Silk road caravans", 4)).await.unwrap();

    let calls = images.calls.lock().unwrap().clone();
    assert_eq!(calls, vec!["a-1", "a-2", "a-3", "a-4"]);
}

#[tokio::test]
async fn scripting_failure_records_failed_state_and_no_feed() {
    let engine = FeedEngine::new(FailingScript, ScriptedImages::new(vec![]));

    let result = engine.run(&request("Anything", 2)).await;

    assert!(result.is_err());
    assert!(engine.current_feed().is_none());
    let status = engine.current_status();
    assert_eq!(*status.phase(), WorkflowPhase::Failed);
    // Progress holds its last published value rather than dropping.
    assert_eq!(*status.progress(), 10.0);
}

#[tokio::test]
async fn published_progress_is_monotonic_and_ends_at_100() {
    let engine = Arc::new(FeedEngine::new(
        FixedScript(draft("a", 3)),
        ScriptedImages::new(vec!["a-3"]),
    ));

    let statuses: Arc<Mutex<Vec<WorkflowStatus>>> = Arc::new(Mutex::new(Vec::new()));
    let mut rx = engine.subscribe_status();
    let collected = Arc::clone(&statuses);
    let collector = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            collected.lock().unwrap().push(rx.borrow().clone());
        }
    });

    engine.run(&request("Glacier retreat", 3)).await.unwrap();
    tokio::task::yield_now().await;
    collector.abort();

    let observed = statuses.lock().unwrap().clone();
    assert!(!observed.is_empty());

    let phases: Vec<WorkflowPhase> = observed.iter().map(|s| *s.phase()).collect();
    assert_eq!(phases.first(), Some(&WorkflowPhase::Scripting));
    assert_eq!(phases.last(), Some(&WorkflowPhase::Completed));
    assert!(phases.contains(&WorkflowPhase::Visualizing));

    let progress: Vec<f32> = observed.iter().map(|s| *s.progress()).collect();
    assert!(
        progress.windows(2).all(|pair| pair[0] <= pair[1]),
        "progress must never decrease: {:?}",
        progress
    );
    assert_eq!(progress.last(), Some(&100.0));
}

#[tokio::test]
async fn snapshots_never_mutate_previously_resolved_slides() {
    let engine = Arc::new(FeedEngine::new(
        FixedScript(draft("a", 3)),
        ScriptedImages::new(vec!["a-2"]),
    ));

    let snapshots = Arc::new(Mutex::new(Vec::new()));
    let mut rx = engine.subscribe_feed();
    let collected = Arc::clone(&snapshots);
    let collector = tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            if let Some(feed) = rx.borrow().clone() {
                collected.lock().unwrap().push(feed);
            }
        }
    });

    engine.run(&request("Harbor cities", 3)).await.unwrap();
    tokio::task::yield_now().await;
    collector.abort();

    let snapshots = snapshots.lock().unwrap().clone();
    // Initial commit plus one snapshot per slide attempt.
    assert_eq!(snapshots.len(), 4);

    for pair in snapshots.windows(2) {
        let (earlier, later) = (&pair[0], &pair[1]);
        assert_eq!(earlier.id(), later.id());
        for (index, slide) in earlier.slides().iter().enumerate() {
            if !*slide.image_pending() {
                assert_eq!(slide, &later.slides()[index], "resolved slide {} mutated", index);
            }
        }
    }
}

#[tokio::test]
async fn status_resets_to_idle_after_display_delay() {
    tokio::time::pause();
    let engine = FeedEngine::new(FixedScript(draft("a", 1)), ScriptedImages::new(vec![]));

    engine.run(&request("One frame story", 1)).await.unwrap();
    assert_eq!(*engine.current_status().phase(), WorkflowPhase::Completed);

    // Let the spawned reset task register its sleep deadline before advancing.
    tokio::task::yield_now().await;
    tokio::time::advance(std::time::Duration::from_millis(1600)).await;
    tokio::task::yield_now().await;

    let status = engine.current_status();
    assert_eq!(*status.phase(), WorkflowPhase::Idle);
    assert!(status.message().is_empty());
    // The completed feed stays available after the status clears.
    assert!(engine.current_feed().is_some());
}
