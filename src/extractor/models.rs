//! Data structures for extracted video information

use serde::{Deserialize, Serialize};

/// Metadata returned by `yt-dlp --dump-json` for a single video.
///
/// Every field is optional on the wire; defaults are applied when the
/// API response is assembled, not here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractedInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub uploader: Option<String>,
    /// Direct download URL for the selected format, when yt-dlp resolves one.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub filesize: Option<u64>,
    #[serde(default)]
    pub filesize_approx: Option<u64>,
    #[serde(default)]
    pub formats: Vec<FormatEntry>,
}

/// One candidate format from the extractor's `formats` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatEntry {
    #[serde(default)]
    pub format_id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub ext: Option<String>,
    #[serde(default)]
    pub filesize: Option<u64>,
    #[serde(default)]
    pub filesize_approx: Option<u64>,
}
