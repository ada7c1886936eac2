//! Script generation client.

use crate::wire::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};
use crate::{GeminiClient, GeminiResult, extraction};
use async_trait::async_trait;
use momentum_core::{GenerationRequest, ScriptDraft, prompt};
use momentum_error::{
    GeminiError, GeminiErrorKind, MomentumResult, RetryableError, ScriptError, ScriptErrorKind,
};
use momentum_interface::ScriptGenerator;
use serde_json::json;
use tracing::{info, instrument, warn};

/// Default model for script generation.
pub const SCRIPT_MODEL: &str = "gemini-3-pro-preview";

/// Gemini-backed script writer.
///
/// Requests structured JSON output conforming to the slide/hashtag schema
/// and parses the result into a [`ScriptDraft`]. Transient transport
/// failures (408/429/5xx) are retried with exponential backoff inside this
/// client; parse failures are not retried and surface as
/// [`ScriptErrorKind::MalformedResponse`] and fail the run.
#[derive(Debug, Clone)]
pub struct GeminiScriptWriter {
    client: GeminiClient,
    model: String,
    no_retry: bool,
    max_retries: Option<usize>,
    retry_backoff_ms: Option<u64>,
}

impl GeminiScriptWriter {
    /// Create a script writer over the shared HTTP core with the default
    /// model.
    pub fn new(client: GeminiClient) -> Self {
        Self {
            client,
            model: SCRIPT_MODEL.to_string(),
            no_retry: false,
            max_retries: None,
            retry_backoff_ms: None,
        }
    }

    /// Override the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Configure retry behavior.
    ///
    /// `no_retry` disables retry entirely; `max_retries` and
    /// `retry_backoff_ms` override the per-error defaults when set.
    pub fn with_retry(
        mut self,
        no_retry: bool,
        max_retries: Option<usize>,
        retry_backoff_ms: Option<u64>,
    ) -> Self {
        self.no_retry = no_retry;
        self.max_retries = max_retries;
        self.retry_backoff_ms = retry_backoff_ms;
        self
    }

    fn build_request(&self, request: &GenerationRequest) -> GenerateContentRequest {
        let text = prompt::script_prompt(request.topic(), *request.slide_count(), *request.style());
        GenerateContentRequest {
            contents: vec![Content::user_text(text)],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(script_response_schema()),
                image_config: None,
            }),
        }
    }

    /// Send the request, retrying transient transport failures.
    async fn generate_with_retry(
        &self,
        wire: &GenerateContentRequest,
    ) -> GeminiResult<GenerateContentResponse> {
        use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};

        if self.no_retry {
            return self.client.generate_content(&self.model, wire).await;
        }

        // Try once to get an error-specific strategy.
        let first = self.client.generate_content(&self.model, wire).await;
        let (initial_ms, max_retries, max_delay_secs) = match first {
            Ok(response) => return Ok(response),
            Err(e) => {
                if !e.is_retryable() {
                    warn!(error = %e, "Permanent Gemini error, failing immediately");
                    return Err(e);
                }

                let (mut init_ms, mut retries, delay_secs) = e.retry_strategy_params();
                if let Some(override_backoff) = self.retry_backoff_ms {
                    init_ms = override_backoff;
                }
                if let Some(override_retries) = self.max_retries {
                    retries = override_retries;
                }

                info!(
                    error = %e,
                    model = %self.model,
                    initial_backoff_ms = init_ms,
                    max_retries = retries,
                    max_delay_secs = delay_secs,
                    "Script request failed, will retry with configured strategy"
                );

                (init_ms, retries, delay_secs)
            }
        };

        let retry_strategy = ExponentialBackoff::from_millis(initial_ms)
            .factor(2)
            .max_delay(std::time::Duration::from_secs(max_delay_secs))
            .map(jitter)
            .take(max_retries);

        Retry::spawn(retry_strategy, || async {
            match self.client.generate_content(&self.model, wire).await {
                Ok(response) => Ok(response),
                Err(e) if e.is_retryable() => {
                    warn!(error = %e, "Script request failed, will retry");
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => {
                    warn!(error = %e, "Permanent Gemini error, failing immediately");
                    Err(RetryError::Permanent(e))
                }
            }
        })
        .await
    }
}

#[async_trait]
impl ScriptGenerator for GeminiScriptWriter {
    #[instrument(skip(self, request), fields(topic = %request.topic(), slides = *request.slide_count()))]
    async fn generate_script(&self, request: &GenerationRequest) -> MomentumResult<ScriptDraft> {
        let wire = self.build_request(request);
        let response = self.generate_with_retry(&wire).await?;

        let text = response
            .text()
            .ok_or_else(|| GeminiError::new(GeminiErrorKind::EmptyResponse))?;

        let draft = parse_script_response(&text)?;

        let requested = *request.slide_count() as usize;
        let returned = draft.slides().len();
        if returned != requested {
            return Err(ScriptError::new(ScriptErrorKind::SlideCountMismatch {
                requested,
                returned,
            })
            .into());
        }

        Ok(draft)
    }
}

/// Parse a model response body into a [`ScriptDraft`].
///
/// # Errors
///
/// Returns [`ScriptErrorKind::MalformedResponse`] if the text holds no JSON
/// object or the object does not match the schema.
pub fn parse_script_response(text: &str) -> MomentumResult<ScriptDraft> {
    let json = extraction::extract_json(text)?;
    serde_json::from_str(&json)
        .map_err(|e| ScriptError::new(ScriptErrorKind::MalformedResponse(e.to_string())).into())
}

/// The response schema sent with every script request.
fn script_response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "slides": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "slideNumber": { "type": "NUMBER" },
                        "text": { "type": "STRING" },
                        "imagePrompt": { "type": "STRING" }
                    },
                    "required": ["slideNumber", "text", "imagePrompt"]
                }
            },
            "hashtags": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["slides", "hashtags"]
    })
}
