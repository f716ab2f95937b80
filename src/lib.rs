//! vidlink library

pub mod api;
pub mod extractor;
pub mod utils;

// Re-export main types for easier use
pub use api::{ApiError, AppState, VideoResponse};
pub use extractor::{ExtractedInfo, Extractor, FormatChoice, FormatEntry, YtDlpExtractor};
pub use utils::{ExtractErrorKind, ServerSettings, VidlinkError};
