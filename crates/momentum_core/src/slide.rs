//! Slide type: one narrative beat paired with its image state.

use crate::{ImageResource, SlideDraft};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One slide of an active feed.
///
/// Created from a [`SlideDraft`] with `image_pending = true` and no image;
/// resolved exactly once when its image attempt completes. A successful
/// attempt sets the image and clears the pending flag, a failed attempt only
/// clears the flag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Slide {
    /// Identifier stable for the lifetime of the owning feed.
    id: String,
    /// 1-based position in the feed.
    slide_number: u32,
    /// Narrative text.
    text: String,
    /// Prompt used for image generation.
    image_prompt: String,
    /// The generated image, absent until generation succeeds.
    image: Option<ImageResource>,
    /// True while the image attempt has not yet resolved.
    image_pending: bool,
}

impl Slide {
    /// Build a pending slide from a draft, assigning its feed-local identity
    /// and final 1-based position.
    pub fn from_draft(draft: SlideDraft, id: impl Into<String>, slide_number: u32) -> Self {
        Self {
            id: id.into(),
            slide_number,
            text: draft.text().clone(),
            image_prompt: draft.image_prompt().clone(),
            image: None,
            image_pending: true,
        }
    }

    /// Record the outcome of this slide's image attempt.
    ///
    /// `Some` marks success, `None` marks failure; either way the slide is no
    /// longer pending.
    pub fn resolve(&mut self, image: Option<ImageResource>) {
        self.image = image;
        self.image_pending = false;
    }

    /// True when image generation succeeded for this slide.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Whitespace-separated word count of the slide text.
    pub fn word_count(&self) -> usize {
        self.text.split_whitespace().count()
    }
}
