//! Tests for the facade surface: error types and export formatting.

use momentum::{
    Feed, GenerationRequest, GeminiError, GeminiErrorKind, ScriptDraft, ScriptError,
    ScriptErrorKind, SlideDraft, VisualStyle, export, prompt,
};

//
// ─── ERROR HANDLING TESTS ───────────────────────────────────────────────────────
//

#[test]
fn test_gemini_error_display() {
    let error = GeminiError::new(GeminiErrorKind::MissingApiKey);
    let display = format!("{}", error);
    assert!(display.contains("GEMINI_API_KEY environment variable not set"));
    assert!(display.contains("Gemini Error:"));
    assert!(display.contains("at line"));
}

#[test]
fn test_gemini_error_kind_display() {
    let cases = vec![
        (
            GeminiErrorKind::MissingApiKey,
            "GEMINI_API_KEY environment variable not set",
        ),
        (
            GeminiErrorKind::ApiRequest("request failed".to_string()),
            "Gemini API request failed: request failed",
        ),
        (
            GeminiErrorKind::NoImageReturned,
            "Gemini response contained no inline image data",
        ),
        (
            GeminiErrorKind::Base64Decode("invalid base64".to_string()),
            "Base64 decode error: invalid base64",
        ),
    ];

    for (kind, expected) in cases {
        let display = format!("{}", kind);
        assert_eq!(display, expected, "Error kind display mismatch");
    }
}

#[test]
fn test_error_source_location_tracking() {
    let error = GeminiError::new(GeminiErrorKind::MissingApiKey);
    assert!(error.line > 0, "Error should capture line number");
    assert!(
        error.file.contains("facade_test.rs"),
        "Error should capture file name"
    );
}

#[test]
fn test_retryable_status_classification() {
    for status_code in [408, 429, 500, 502, 503, 504] {
        let kind = GeminiErrorKind::HttpError {
            status_code,
            message: String::new(),
        };
        assert!(kind.is_retryable(), "HTTP {} should retry", status_code);
    }
    let unauthorized = GeminiErrorKind::HttpError {
        status_code: 401,
        message: String::new(),
    };
    assert!(!unauthorized.is_retryable());
    assert!(!GeminiErrorKind::NoImageReturned.is_retryable());
}

#[test]
fn test_script_error_display() {
    let error = ScriptError::new(ScriptErrorKind::SlideCountMismatch {
        requested: 3,
        returned: 2,
    });
    let display = format!("{}", error);
    assert!(display.contains("Expected 3 slides but the response contained 2"));
}

//
// ─── EXPORT FORMAT TESTS ────────────────────────────────────────────────────────
//

fn sample_feed() -> Feed {
    let request = GenerationRequest::builder()
        .topic("Deep Sea Mining")
        .slide_count(2u8)
        .style(VisualStyle::News)
        .build()
        .unwrap();
    let script = ScriptDraft::new(
        vec![
            SlideDraft::new(1, "The ocean floor hides a fortune.", "a mining robot"),
            SlideDraft::new(2, "BUT nobody owns it.", "a treaty signing"),
        ],
        vec!["ocean".to_string(), "#mining".to_string()],
    );
    Feed::new(&request, script)
}

#[test]
fn test_post_bundle_shape() {
    let feed = sample_feed();
    let bundle = export::post_bundle(&feed);
    assert!(bundle.starts_with("The ocean floor hides a fortune.\n\nBUT nobody owns it."));
    assert!(bundle.contains("\n\n.\n.\n.\n"));
    assert!(bundle.ends_with("#ocean #mining"));
}

#[test]
fn test_image_filename_derivation() {
    let feed = sample_feed();
    assert_eq!(
        export::image_filename(feed.topic(), 1, "png"),
        "momentum-ai-deep-sea-mining-2.png"
    );
}

#[test]
fn test_prompt_word_budget_through_facade() {
    assert!(prompt::script_prompt("x", 1, VisualStyle::News).contains("exactly 400"));
    assert!(prompt::script_prompt("x", 5, VisualStyle::News).contains("under 300"));
}
