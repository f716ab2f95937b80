//! Incoming URL validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Accepted YouTube URL shapes: watch page, youtu.be short link, shorts.
static VIDEO_URL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^https?://(www\.)?youtube\.com/watch\?v=[\w-]+",
        r"^https?://youtu\.be/[\w-]+",
        r"^https?://(www\.)?youtube\.com/shorts/[\w-]+",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("static pattern compiles"))
    .collect()
});

/// Check whether a raw URL matches one of the accepted video page shapes.
///
/// Playlists, channels, other hosts and malformed input are all rejected.
pub fn is_valid_video_url(url: &str) -> bool {
    VIDEO_URL_PATTERNS.iter().any(|re| re.is_match(url))
}
