use crate::extractor::format::FormatChoice;
use crate::extractor::models::ExtractedInfo;
use crate::utils::error::VidlinkError;
use async_trait::async_trait;

/// Core trait for video extractors
///
/// This trait isolates the API layer from the specific extraction method,
/// so handlers can be exercised against a mock without spawning yt-dlp.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns a unique identifier for this extractor (e.g., "ytdlp")
    fn id(&self) -> &'static str;

    /// Extracts video metadata without downloading, honoring a format preference
    async fn extract_info(
        &self,
        url: &str,
        format: FormatChoice,
    ) -> Result<ExtractedInfo, VidlinkError>;
}
