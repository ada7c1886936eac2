//! Generator traits for the external generative capability.

use async_trait::async_trait;
use momentum_core::{AspectRatio, GenerationRequest, ImageResource, ScriptDraft, VisualStyle};
use momentum_error::MomentumResult;
use std::sync::Arc;

/// Writes the narrative script for one generation request.
///
/// A failure here aborts the whole run; there is nothing to render yet.
#[async_trait]
pub trait ScriptGenerator: Send + Sync {
    /// Generate slide drafts and hashtags for the request's topic.
    async fn generate_script(&self, request: &GenerationRequest) -> MomentumResult<ScriptDraft>;
}

/// Synthesizes one illustrative image for a slide.
///
/// Each call is independent; a failed attempt is final for that slide in
/// that run, and retry policy (if any) lives inside the implementation.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate an image for the given slide prompt.
    async fn generate_slide_image(
        &self,
        image_prompt: &str,
        style: VisualStyle,
        aspect_ratio: AspectRatio,
    ) -> MomentumResult<ImageResource>;
}

#[async_trait]
impl<T> ScriptGenerator for Arc<T>
where
    T: ScriptGenerator + ?Sized,
{
    async fn generate_script(&self, request: &GenerationRequest) -> MomentumResult<ScriptDraft> {
        (**self).generate_script(request).await
    }
}

#[async_trait]
impl<T> ImageGenerator for Arc<T>
where
    T: ImageGenerator + ?Sized,
{
    async fn generate_slide_image(
        &self,
        image_prompt: &str,
        style: VisualStyle,
        aspect_ratio: AspectRatio,
    ) -> MomentumResult<ImageResource> {
        (**self)
            .generate_slide_image(image_prompt, style, aspect_ratio)
            .await
    }
}
