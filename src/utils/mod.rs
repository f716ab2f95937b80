//! Utility modules for error handling, configuration and URL validation

pub mod config;
pub mod error;
pub mod validate;

// Re-export for convenience
pub use config::ServerSettings;
pub use error::{ExtractErrorKind, VidlinkError};
pub use validate::is_valid_video_url;
