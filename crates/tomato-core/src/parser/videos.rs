//! Videos payload parser for Rotten Tomatoes
//!
//! Media `/videos` pages embed their video list as JSON inside
//! `<script id="videos">`.

use scraper::{Html, Selector};
use serde_json::Value;
use tracing::debug;

use crate::error::{Result, TomatoError};
use crate::types::VideoDescriptor;

const VIDEOS_SCRIPT_SELECTOR: &str = "script#videos";

/// Parses a videos page and returns the embedded video descriptors
///
/// # Arguments
/// * `html` - Raw HTML string from a media `/videos` page
///
/// # Returns
/// Video descriptors in payload order (may be empty). Entries that are not
/// JSON objects are skipped.
///
/// # Errors
/// - `NotFound` if the page has no videos script block
/// - `ParseError` if the block is not a JSON array
pub fn parse_videos(html: &str) -> Result<Vec<VideoDescriptor>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(VIDEOS_SCRIPT_SELECTOR)
        .map_err(|e| TomatoError::ParseError(format!("Invalid selector: {:?}", e)))?;

    let script = document.select(&selector).next().ok_or_else(|| {
        TomatoError::NotFound("Script tag with id \"videos\" not found".to_string())
    })?;

    let payload: String = script.text().collect();

    let entries: Vec<Value> = serde_json::from_str(payload.trim())
        .map_err(|e| TomatoError::ParseError(format!("Invalid videos JSON: {}", e)))?;

    let total = entries.len();
    let videos: Vec<VideoDescriptor> = entries
        .iter()
        .filter_map(VideoDescriptor::from_value)
        .collect();

    if videos.len() < total {
        debug!(skipped = total - videos.len(), "Skipped non-object video entries");
    }

    Ok(videos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_videos_payload() {
        let html = r#"
        <html>
        <head></head>
        <body>
            <script id="videos" data-json="videos" type="application/json">
            [
                {"videoType": "TRAILER", "file": "https://link.theplatform.com/a.m3u8",
                 "title": "Inception: Official Trailer", "thumbnail": "https://img/a.jpg",
                 "duration": "2:28"},
                {"videoType": "CLIP", "file": "https://link.theplatform.com/b.m3u8",
                 "title": "Inception: Dream Collapse", "thumbnail": "https://img/b.jpg"}
            ]
            </script>
        </body>
        </html>
        "#;

        let videos = parse_videos(html).unwrap();
        assert_eq!(videos.len(), 2);
        assert!(videos[0].is_trailer());
        assert_eq!(videos[0].file, "https://link.theplatform.com/a.m3u8");
        assert_eq!(videos[0].title, "Inception: Official Trailer");
        assert_eq!(videos[0].thumbnail, "https://img/a.jpg");
        assert_eq!(videos[1].video_type, "CLIP");
    }

    #[test]
    fn test_parse_videos_tolerates_bad_field_types() {
        let html = r#"<script id="videos">[
            {"videoType": "TRAILER", "file": "https://v/1.mp4", "title": "Official Trailer",
             "thumbnail": "https://img/1.jpg"},
            {"videoType": "CLIP", "file": "https://v/2.mp4", "title": 42}
        ]</script>"#;

        let videos = parse_videos(html).unwrap();
        assert_eq!(videos.len(), 2);
        assert_eq!(videos[0].title, "Official Trailer");
        assert_eq!(videos[1].video_type, "CLIP");
        assert_eq!(videos[1].title, "");
    }

    #[test]
    fn test_parse_videos_skips_non_object_entries() {
        let html = r#"<script id="videos">[
            "TRAILER", null, 7,
            {"videoType": "TRAILER", "file": "https://v/1.mp4"}
        ]</script>"#;

        let videos = parse_videos(html).unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].file, "https://v/1.mp4");
    }

    #[test]
    fn test_parse_videos_empty_array() {
        let html = r#"<script id="videos">[]</script>"#;
        let videos = parse_videos(html).unwrap();
        assert!(videos.is_empty());
    }

    #[test]
    fn test_parse_videos_missing_script() {
        let html = r#"<html><body><script id="scoreboard">{}</script></body></html>"#;
        match parse_videos(html) {
            Err(TomatoError::NotFound(msg)) => assert!(msg.contains("videos")),
            other => panic!("Expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_videos_invalid_json() {
        let html = r#"<script id="videos">[{"videoType": "TRAILER",</script>"#;
        assert!(matches!(parse_videos(html), Err(TomatoError::ParseError(_))));
    }

    #[test]
    fn test_parse_videos_not_an_array() {
        let html = r#"<script id="videos">{"videoType": "TRAILER"}</script>"#;
        assert!(matches!(parse_videos(html), Err(TomatoError::ParseError(_))));
    }
}
