//! Feed type: one generation run's full result set.

use crate::{AspectRatio, GenerationRequest, ImageResource, ScriptDraft, Slide, VisualStyle};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The result set of one generation run: slides, hashtags, and metadata.
///
/// Owned exclusively by the orchestrator for the duration of a run and
/// replaced wholesale when a new run starts. The slide count is fixed at
/// creation; `total_words` is computed once at creation and never updated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Feed {
    /// Unique identifier for this run.
    id: Uuid,
    /// Topic echoed from the request.
    topic: String,
    /// Style echoed from the request.
    style: VisualStyle,
    /// Aspect ratio echoed from the request.
    aspect_ratio: AspectRatio,
    /// Slides in ascending slide-number order.
    slides: Vec<Slide>,
    /// Hashtag strings as returned by the model.
    hashtags: Vec<String>,
    /// Sum of per-slide word counts, fixed at creation.
    total_words: usize,
}

impl Feed {
    /// Construct a feed from a request and the script client's draft.
    ///
    /// Drafts are sorted by their model-assigned slide number, then
    /// renumbered 1..n so the feed's ordering invariant holds regardless of
    /// how the model numbered them. Every slide starts image-pending.
    pub fn new(request: &GenerationRequest, script: ScriptDraft) -> Self {
        let (mut drafts, hashtags) = script.into_parts();
        drafts.sort_by_key(|draft| *draft.slide_number());

        let slides: Vec<Slide> = drafts
            .into_iter()
            .enumerate()
            .map(|(index, draft)| Slide::from_draft(draft, index.to_string(), index as u32 + 1))
            .collect();
        let total_words = slides.iter().map(Slide::word_count).sum();

        Self {
            id: Uuid::new_v4(),
            topic: request.topic().clone(),
            style: *request.style(),
            aspect_ratio: *request.aspect_ratio(),
            slides,
            hashtags,
            total_words,
        }
    }

    /// Number of slides in this feed.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Record the outcome of the image attempt for the slide at `index`.
    pub fn resolve_slide(&mut self, index: usize, image: Option<ImageResource>) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.resolve(image);
        }
    }
}
