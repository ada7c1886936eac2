//! Image generation client.

use crate::wire::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, ImageConfig,
};
use crate::{GeminiClient, GeminiResult};
use async_trait::async_trait;
use base64::Engine;
use momentum_core::{AspectRatio, ImageResource, VisualStyle, prompt};
use momentum_error::{GeminiError, GeminiErrorKind, MomentumResult};
use momentum_interface::ImageGenerator;
use tracing::instrument;

/// Default model for image generation.
pub const IMAGE_MODEL: &str = "gemini-2.5-flash-image";

/// Gemini-backed image maker.
///
/// Sends the style-prefixed prompt with the target aspect ratio and decodes
/// the first inline image part of the response. Deliberately retry-free:
/// one failed attempt is final for that slide in that run.
#[derive(Debug, Clone)]
pub struct GeminiImageMaker {
    client: GeminiClient,
    model: String,
}

impl GeminiImageMaker {
    /// Create an image maker over the shared HTTP core with the default
    /// model.
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: IMAGE_MODEL.to_string(),
        }
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn build_request(
        &self,
        image_prompt: &str,
        style: VisualStyle,
        aspect_ratio: AspectRatio,
    ) -> GenerateContentRequest {
        let full_prompt = prompt::image_prompt(image_prompt, style);
        GenerateContentRequest {
            contents: vec![Content::user_text(full_prompt)],
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    aspect_ratio: aspect_ratio.to_string(),
                }),
                ..Default::default()
            }),
        }
    }
}

#[async_trait]
impl ImageGenerator for GeminiImageMaker {
    #[instrument(skip_all, fields(style = %style, aspect = %aspect_ratio))]
    async fn generate_slide_image(
        &self,
        image_prompt: &str,
        style: VisualStyle,
        aspect_ratio: AspectRatio,
    ) -> MomentumResult<ImageResource> {
        let wire = self.build_request(image_prompt, style, aspect_ratio);
        let response = self.client.generate_content(&self.model, &wire).await?;
        Ok(decode_inline_image(&response)?)
    }
}

/// Decode the first inline image part of a response.
///
/// # Errors
///
/// Returns [`GeminiErrorKind::NoImageReturned`] when no inline part exists,
/// or [`GeminiErrorKind::Base64Decode`] when the payload is not valid
/// base64.
pub fn decode_inline_image(response: &GenerateContentResponse) -> GeminiResult<ImageResource> {
    let inline = response
        .first_inline_data()
        .ok_or_else(|| GeminiError::new(GeminiErrorKind::NoImageReturned))?;

    let data = base64::engine::general_purpose::STANDARD
        .decode(inline.data.as_bytes())
        .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))?;

    Ok(ImageResource::new(inline.mime_type.clone(), data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response_with_parts(parts: &str) -> GenerateContentResponse {
        serde_json::from_str(&format!(
            r#"{{"candidates": [{{"content": {{"parts": [{}]}}}}]}}"#,
            parts
        ))
        .unwrap()
    }

    #[test]
    fn decodes_first_inline_image() {
        let response =
            response_with_parts(r#"{"inlineData": {"mimeType": "image/png", "data": "iVBORw=="}}"#);
        let image = decode_inline_image(&response).unwrap();
        assert_eq!(image.mime(), "image/png");
        assert_eq!(image.data(), &[0x89, 0x50, 0x4E, 0x47]);
    }

    #[test]
    fn text_only_response_is_no_image() {
        let response = response_with_parts(r#"{"text": "sorry, no image"}"#);
        let err = decode_inline_image(&response).unwrap_err();
        assert_eq!(err.kind, GeminiErrorKind::NoImageReturned);
    }

    #[test]
    fn invalid_base64_is_a_decode_error() {
        let response = response_with_parts(
            r#"{"inlineData": {"mimeType": "image/png", "data": "not base64!!"}}"#,
        );
        let err = decode_inline_image(&response).unwrap_err();
        assert!(matches!(err.kind, GeminiErrorKind::Base64Decode(_)));
    }
}
