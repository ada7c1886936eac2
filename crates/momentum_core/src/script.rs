//! Script draft types produced by the script generation client.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One narrative beat as written by the model, before image generation.
///
/// Deserializes directly from the model's camelCase JSON. Immutable once
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct SlideDraft {
    /// Position of the slide in the narrative, as numbered by the model.
    slide_number: u32,
    /// The narrative text for this slide.
    text: String,
    /// The image prompt the model wrote for this slide.
    image_prompt: String,
}

impl SlideDraft {
    /// Create a slide draft.
    pub fn new(slide_number: u32, text: impl Into<String>, image_prompt: impl Into<String>) -> Self {
        Self {
            slide_number,
            text: text.into(),
            image_prompt: image_prompt.into(),
        }
    }
}

/// The full output of one script generation call.
///
/// # Examples
///
/// ```
/// use momentum_core::{ScriptDraft, SlideDraft};
///
/// let draft = ScriptDraft::new(
///     vec![SlideDraft::new(1, "A hook.", "a dramatic skyline")],
///     vec!["history".to_string()],
/// );
/// assert_eq!(draft.slides().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ScriptDraft {
    /// Ordered slide drafts.
    slides: Vec<SlideDraft>,
    /// Hashtag strings, without a leading `#`.
    hashtags: Vec<String>,
}

impl ScriptDraft {
    /// Create a script draft from its parts.
    pub fn new(slides: Vec<SlideDraft>, hashtags: Vec<String>) -> Self {
        Self { slides, hashtags }
    }

    /// Consume the draft, yielding slides and hashtags.
    pub fn into_parts(self) -> (Vec<SlideDraft>, Vec<String>) {
        (self.slides, self.hashtags)
    }
}
