//! Request handler for the video info endpoint

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::api::server::AppState;
use crate::extractor::format::FormatChoice;
use crate::extractor::models::ExtractedInfo;
use crate::utils::error::{ExtractErrorKind, VidlinkError};
use crate::utils::validate::is_valid_video_url;

/// Query parameters for `GET /api/info`
#[derive(Debug, Deserialize)]
pub struct InfoQuery {
    pub url: Option<String>,
    #[serde(default)]
    pub format: FormatChoice,
}

/// Success body: stable response shape regardless of what yt-dlp returned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoResponse {
    pub title: String,
    pub thumbnail: Option<String>,
    pub duration: u64,
    pub uploader: String,
    pub download_url: Option<String>,
    pub ext: String,
    pub filesize: Option<u64>,
}

impl VideoResponse {
    /// Normalize extractor output, applying defaults for absent fields.
    ///
    /// When the top-level result carries no direct URL, the last entry of the
    /// `formats` list is used instead; yt-dlp emits that list in ascending
    /// preference order, so the last entry is its preferred pick.
    pub fn from_info(info: ExtractedInfo, format: FormatChoice) -> Self {
        let mut response = Self {
            title: info.title.unwrap_or_else(|| "video".to_string()),
            thumbnail: info.thumbnail,
            duration: info.duration.unwrap_or(0),
            uploader: info.uploader.unwrap_or_default(),
            download_url: info.url.filter(|u| !u.is_empty()),
            ext: info
                .ext
                .unwrap_or_else(|| format.default_ext().to_string()),
            filesize: info.filesize.or(info.filesize_approx),
        };

        if response.download_url.is_none() {
            if let Some(chosen) = info.formats.last() {
                response.download_url = chosen.url.clone();
                if let Some(ext) = &chosen.ext {
                    response.ext = ext.clone();
                }
                response.filesize = chosen.filesize.or(chosen.filesize_approx);
            }
        }

        response
    }
}

/// Errors surfaced to API clients as `{ "error": <message> }`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    MissingUrl,
    InvalidUrl,
    Extraction(ExtractErrorKind),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl | ApiError::InvalidUrl => StatusCode::BAD_REQUEST,
            ApiError::Extraction(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::MissingUrl => "URL requerida",
            ApiError::InvalidUrl => "URL de YouTube no valida",
            ApiError::Extraction(kind) => kind.user_message(),
        }
    }
}

impl From<VidlinkError> for ApiError {
    fn from(err: VidlinkError) -> Self {
        match err {
            VidlinkError::Extraction { kind, .. } => ApiError::Extraction(kind),
            // Spawn failures, bad JSON, missing binary: nothing actionable
            // for the client, so they collapse into the generic category.
            _ => ApiError::Extraction(ExtractErrorKind::Unknown),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

/// GET /api/info?url=...&format=...
///
/// Validates the URL, invokes the extractor with the requested format
/// preference and reshapes its output into a [`VideoResponse`].
pub async fn video_info(
    State(state): State<AppState>,
    Query(query): Query<InfoQuery>,
) -> Result<Json<VideoResponse>, ApiError> {
    let url = query
        .url
        .as_deref()
        .filter(|u| !u.is_empty())
        .ok_or(ApiError::MissingUrl)?;

    if !is_valid_video_url(url) {
        return Err(ApiError::InvalidUrl);
    }

    let info = state.extractor.extract_info(url, query.format).await?;
    let response = VideoResponse::from_info(info, query.format);
    info!(
        "Resolved {} ({}, {} s)",
        response.title, response.ext, response.duration
    );

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::models::FormatEntry;

    fn info_with_direct_url() -> ExtractedInfo {
        ExtractedInfo {
            title: Some("Song".to_string()),
            thumbnail: Some("https://i.ytimg.com/vi/abc123/default.jpg".to_string()),
            duration: Some(120),
            uploader: Some("Artist".to_string()),
            url: Some("http://x/a.m4a".to_string()),
            ext: Some("m4a".to_string()),
            filesize: Some(5_000_000),
            filesize_approx: None,
            formats: vec![],
        }
    }

    #[test]
    fn reshapes_direct_result() {
        let response = VideoResponse::from_info(info_with_direct_url(), FormatChoice::Audio);
        assert_eq!(response.title, "Song");
        assert_eq!(response.duration, 120);
        assert_eq!(response.uploader, "Artist");
        assert_eq!(response.download_url.as_deref(), Some("http://x/a.m4a"));
        assert_eq!(response.ext, "m4a");
        assert_eq!(response.filesize, Some(5_000_000));
    }

    #[test]
    fn applies_defaults_for_missing_fields() {
        let response = VideoResponse::from_info(ExtractedInfo::default(), FormatChoice::Mp4);
        assert_eq!(response.title, "video");
        assert_eq!(response.duration, 0);
        assert_eq!(response.uploader, "");
        assert_eq!(response.ext, "mp4");
        assert!(response.thumbnail.is_none());
        assert!(response.download_url.is_none());
        assert!(response.filesize.is_none());
    }

    #[test]
    fn audio_default_ext_when_extractor_omits_it() {
        let mut info = info_with_direct_url();
        info.ext = None;
        let response = VideoResponse::from_info(info, FormatChoice::Audio);
        assert_eq!(response.ext, "m4a");
    }

    #[test]
    fn falls_back_to_last_format_entry() {
        let info = ExtractedInfo {
            title: Some("Clip".to_string()),
            ext: Some("mp4".to_string()),
            filesize: Some(111),
            formats: vec![
                FormatEntry {
                    format_id: "18".to_string(),
                    url: Some("https://example.com/low".to_string()),
                    ext: Some("mp4".to_string()),
                    filesize: Some(1_000),
                    filesize_approx: None,
                },
                FormatEntry {
                    format_id: "22".to_string(),
                    url: Some("https://example.com/high".to_string()),
                    ext: Some("webm".to_string()),
                    filesize: None,
                    filesize_approx: Some(9_000),
                },
            ],
            ..Default::default()
        };

        let response = VideoResponse::from_info(info, FormatChoice::Mp4);
        assert_eq!(
            response.download_url.as_deref(),
            Some("https://example.com/high")
        );
        assert_eq!(response.ext, "webm");
        assert_eq!(response.filesize, Some(9_000));
    }

    #[test]
    fn fallback_keeps_ext_when_entry_omits_it() {
        let info = ExtractedInfo {
            ext: Some("mp4".to_string()),
            formats: vec![FormatEntry {
                format_id: "hls".to_string(),
                url: Some("https://example.com/seg".to_string()),
                ext: None,
                filesize: None,
                filesize_approx: None,
            }],
            ..Default::default()
        };

        let response = VideoResponse::from_info(info, FormatChoice::Mp4);
        assert_eq!(response.ext, "mp4");
        assert!(response.filesize.is_none());
    }

    #[test]
    fn empty_formats_list_leaves_url_absent() {
        let mut info = info_with_direct_url();
        info.url = None;
        info.formats = vec![];
        let response = VideoResponse::from_info(info, FormatChoice::Mp4);
        assert!(response.download_url.is_none());
    }

    #[test]
    fn api_error_statuses() {
        assert_eq!(ApiError::MissingUrl.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidUrl.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Extraction(ExtractErrorKind::GeoRestricted).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn io_errors_map_to_generic_category() {
        let err = VidlinkError::IoError(std::io::Error::other("spawn failed"));
        assert_eq!(
            ApiError::from(err),
            ApiError::Extraction(ExtractErrorKind::Unknown)
        );
    }
}
