//! Stub generators for driving the engine without a live API.

// Each test binary uses its own subset of these stubs.
#![allow(dead_code)]

use async_trait::async_trait;
use momentum_core::{
    AspectRatio, GenerationRequest, ImageResource, ScriptDraft, SlideDraft, VisualStyle,
};
use momentum_error::{
    GeminiError, GeminiErrorKind, MomentumResult, ScriptError, ScriptErrorKind,
};
use momentum_interface::{ImageGenerator, ScriptGenerator};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Build a request with the given topic and slide count.
pub fn request(topic: &str, slide_count: u8) -> GenerationRequest {
    GenerationRequest::builder()
        .topic(topic)
        .slide_count(slide_count)
        .build()
        .unwrap()
}

/// A draft with `count` slides whose image prompts are `{tag}-1..{tag}-n`.
pub fn draft(tag: &str, count: u32) -> ScriptDraft {
    let slides = (1..=count)
        .map(|n| SlideDraft::new(n, format!("{} beat {}.", tag, n), format!("{}-{}", tag, n)))
        .collect();
    ScriptDraft::new(slides, vec![format!("{}tag", tag)])
}

/// Script writer answering every request with a fixed draft.
pub struct FixedScript(pub ScriptDraft);

#[async_trait]
impl ScriptGenerator for FixedScript {
    async fn generate_script(&self, _request: &GenerationRequest) -> MomentumResult<ScriptDraft> {
        tokio::task::yield_now().await;
        Ok(self.0.clone())
    }
}

/// Script writer that always fails as a malformed response.
pub struct FailingScript;

#[async_trait]
impl ScriptGenerator for FailingScript {
    async fn generate_script(&self, _request: &GenerationRequest) -> MomentumResult<ScriptDraft> {
        tokio::task::yield_now().await;
        Err(ScriptError::new(ScriptErrorKind::MalformedResponse(
            "expected value at line 1 column 1".to_string(),
        ))
        .into())
    }
}

/// Image maker that fails for prompts containing any of the given markers
/// and records every prompt it was asked for.
pub struct ScriptedImages {
    pub fail_markers: Vec<&'static str>,
    pub calls: Mutex<Vec<String>>,
}

impl ScriptedImages {
    pub fn new(fail_markers: Vec<&'static str>) -> Self {
        Self {
            fail_markers,
            calls: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ImageGenerator for ScriptedImages {
    async fn generate_slide_image(
        &self,
        image_prompt: &str,
        _style: VisualStyle,
        _aspect_ratio: AspectRatio,
    ) -> MomentumResult<ImageResource> {
        tokio::task::yield_now().await;
        self.calls.lock().unwrap().push(image_prompt.to_string());
        if self
            .fail_markers
            .iter()
            .any(|marker| image_prompt.contains(marker))
        {
            return Err(GeminiError::new(GeminiErrorKind::NoImageReturned).into());
        }
        Ok(ImageResource::new("image/png", vec![0x89, 0x50]))
    }
}

/// Image maker that blocks on prompts containing `gate_marker` until
/// released, so a test can hold one run mid-flight while starting another.
pub struct GatedImages {
    pub gate_marker: &'static str,
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl GatedImages {
    pub fn new(gate_marker: &'static str) -> Self {
        Self {
            gate_marker,
            entered: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }
}

#[async_trait]
impl ImageGenerator for GatedImages {
    async fn generate_slide_image(
        &self,
        image_prompt: &str,
        _style: VisualStyle,
        _aspect_ratio: AspectRatio,
    ) -> MomentumResult<ImageResource> {
        if image_prompt.contains(self.gate_marker) {
            self.entered.notify_one();
            self.release.notified().await;
        } else {
            tokio::task::yield_now().await;
        }
        Ok(ImageResource::new("image/png", vec![0x89, 0x50]))
    }
}
