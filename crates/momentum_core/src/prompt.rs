//! Prompt assembly for the generation capabilities.
//!
//! These functions are the entire contract surface with the external model:
//! the script prompt encodes the narrative rules and the response schema in
//! prose, and the image prompt prepends the style descriptor for the selected
//! visual treatment. Pure and deterministic, no failure modes.

use crate::VisualStyle;

/// Build the script generation prompt.
///
/// Encodes the word budget (exactly 400 words for a single slide, under 300
/// total otherwise), the causal-connective rule, Facebook formatting
/// requirements, the 15-hashtag requirement, and the JSON response shape.
pub fn script_prompt(topic: &str, slide_count: u8, style: VisualStyle) -> String {
    let word_target = if slide_count == 1 {
        "exactly 400"
    } else {
        "under 300"
    };

    format!(
        r#"Generate a high-retention social media narrative for: "{topic}".
Total segments/slides: {slide_count}.
Visual Style: {style}.

STRICT RULES FOR FACEBOOK POST FORMATTING:
1. SOUTH PARK RULE: Never use "And then". Use "BUT" (conflict) or "THEREFORE/SO" (consequence) to drive causal momentum.
2. NARRATIVE DEPTH: The total script MUST be {word_target} words.
3. FACEBOOK OPTIMIZATION:
   - Start with a "HOOK" sentence that stops the scroll.
   - Use strategic emojis (not too many, but enough to guide the eye).
   - Use frequent line breaks and short paragraphs for mobile readability.
   - Use bullet points for key facts or steps if relevant.
   - End with a clear "Engagement Hook" or question to drive comments.
4. IMAGE PROMPTS: Provide detailed, high-quality image prompts reflecting the "{style}" visual style.
5. METADATA: Provide exactly 15 high-reach hashtags.

Return ONLY a JSON object:
{{
  "slides": [
    {{ "slideNumber": 1, "text": "...", "imagePrompt": "..." }}
  ],
  "hashtags": ["tag1", "tag2"]
}}"#
    )
}

/// Fixed style descriptor prepended to every image prompt.
pub fn style_prefix(style: VisualStyle) -> &'static str {
    match style {
        VisualStyle::News => {
            "Photojournalism, sharp focus, vibrant, realistic, 8k resolution, documentary style."
        }
        VisualStyle::Cinematic => {
            "Cinematic movie scene, anamorphic lighting, moody atmosphere, highly detailed, film grain."
        }
        VisualStyle::Minimalist => {
            "Minimalist aesthetic, soft natural lighting, white space, clean composition, muted colors."
        }
    }
}

/// Build the full image generation prompt for one slide.
pub fn image_prompt(base_prompt: &str, style: VisualStyle) -> String {
    format!("{} Subject: {}", style_prefix(style), base_prompt)
}
