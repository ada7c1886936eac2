//! Decoded image payloads.

use base64::Engine;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A generated image, decoded from the model's inline payload.
///
/// # Examples
///
/// ```
/// use momentum_core::ImageResource;
///
/// let image = ImageResource::new("image/png", vec![0x89, 0x50, 0x4E, 0x47]);
/// assert!(image.data_uri().starts_with("data:image/png;base64,"));
/// assert_eq!(image.extension(), "png");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct ImageResource {
    /// MIME type declared by the model, e.g. "image/png"
    mime: String,
    /// Raw image bytes
    data: Vec<u8>,
}

impl ImageResource {
    /// Create an image resource from a MIME type and raw bytes.
    pub fn new(mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime: mime.into(),
            data,
        }
    }

    /// Render as a directly displayable data URI.
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime,
            base64::engine::general_purpose::STANDARD.encode(&self.data)
        )
    }

    /// File extension matching the MIME type, defaulting to `png`.
    pub fn extension(&self) -> &'static str {
        match self.mime.as_str() {
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            _ => "png",
        }
    }
}
