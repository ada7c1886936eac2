//! Generation request type.

use crate::{AspectRatio, VisualStyle};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Maximum number of slides a single run may request.
pub const MAX_SLIDE_COUNT: u8 = 10;

/// One user request for a generated feed.
///
/// # Examples
///
/// ```
/// use momentum_core::{GenerationRequest, VisualStyle, AspectRatio};
///
/// let request = GenerationRequest::builder()
///     .topic("The fall of the Berlin Wall")
///     .slide_count(3u8)
///     .style(VisualStyle::News)
///     .aspect_ratio(AspectRatio::Square)
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.slide_count(), 3);
///
/// // Slide counts outside 1..=10 are rejected at build time.
/// assert!(GenerationRequest::builder()
///     .topic("x")
///     .slide_count(11u8)
///     .build()
///     .is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct GenerationRequest {
    /// Topic of the narrative. A blank topic never starts a workflow.
    topic: String,
    /// Number of slides to generate (1 to 10).
    #[builder(default = "1")]
    slide_count: u8,
    /// Visual style applied to both script tone and images.
    #[builder(default)]
    style: VisualStyle,
    /// Aspect ratio for generated images.
    #[builder(default)]
    aspect_ratio: AspectRatio,
}

impl GenerationRequest {
    /// Creates a new builder for `GenerationRequest`.
    pub fn builder() -> GenerationRequestBuilder {
        GenerationRequestBuilder::default()
    }

    /// True when the topic is empty or all whitespace.
    pub fn is_blank(&self) -> bool {
        self.topic.trim().is_empty()
    }
}

impl GenerationRequestBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(count) = self.slide_count {
            if count == 0 || count > MAX_SLIDE_COUNT {
                return Err(format!(
                    "slide_count must be between 1 and {}, got {}",
                    MAX_SLIDE_COUNT, count
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_slide_count() {
        let result = GenerationRequest::builder()
            .topic("topic")
            .slide_count(0u8)
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn defaults_match_single_portrait_cinematic() {
        let request = GenerationRequest::builder().topic("topic").build().unwrap();
        assert_eq!(*request.slide_count(), 1);
        assert_eq!(*request.style(), VisualStyle::Cinematic);
        assert_eq!(*request.aspect_ratio(), AspectRatio::Portrait);
    }

    #[test]
    fn blank_topic_detection() {
        let request = GenerationRequest::builder().topic("   ").build().unwrap();
        assert!(request.is_blank());
    }
}
