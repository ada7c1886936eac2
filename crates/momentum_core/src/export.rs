//! Export formatting for copy and download actions.
//!
//! The formats here are the user-visible copy targets: the full script, the
//! hashtag line, the combined post bundle, and the image download filename.

use crate::{Feed, Slide};

/// Full script: slide texts joined with blank lines.
pub fn full_script(slides: &[Slide]) -> String {
    slides
        .iter()
        .map(|slide| slide.text().as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Hashtag line: space-joined `#tag` tokens.
///
/// Any leading `#` in a stored tag is stripped first so tags never render
/// doubled.
pub fn hashtag_line(hashtags: &[String]) -> String {
    hashtags
        .iter()
        .map(|tag| format!("#{}", tag.trim_start_matches('#')))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Combined post bundle: script, a three-dot separator block, hashtag line.
pub fn post_bundle(feed: &Feed) -> String {
    format!(
        "{}\n\n.\n.\n.\n{}",
        full_script(feed.slides()),
        hashtag_line(feed.hashtags())
    )
}

/// Filename-safe form of a topic: lower-cased, whitespace runs replaced by
/// hyphens.
pub fn topic_slug(topic: &str) -> String {
    topic
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Download filename for one slide image. The index is 1-based.
pub fn image_filename(topic: &str, index: usize, extension: &str) -> String {
    format!("momentum-ai-{}-{}.{}", topic_slug(topic), index + 1, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GenerationRequest, ScriptDraft, SlideDraft};

    fn feed() -> Feed {
        let request = GenerationRequest::builder()
            .topic("Test Topic")
            .slide_count(2u8)
            .build()
            .unwrap();
        let script = ScriptDraft::new(
            vec![
                SlideDraft::new(1, "Line one.", "first"),
                SlideDraft::new(2, "Line two.", "second"),
            ],
            vec!["ai".to_string(), "viral".to_string()],
        );
        Feed::new(&request, script)
    }

    #[test]
    fn bundle_format_is_exact() {
        assert_eq!(post_bundle(&feed()), "Line one.\n\nLine two.\n\n.\n.\n.\n#ai #viral");
    }

    #[test]
    fn hashtags_never_double_the_hash() {
        let tags = vec!["#ai".to_string(), "viral".to_string()];
        assert_eq!(hashtag_line(&tags), "#ai #viral");
    }

    #[test]
    fn filename_slugs_topic_and_uses_one_based_index() {
        assert_eq!(
            image_filename("The Space  Race", 0, "png"),
            "momentum-ai-the-space-race-1.png"
        );
    }
}
