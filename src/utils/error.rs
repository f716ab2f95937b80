//! Error handling for vidlink

use thiserror::Error;

/// Main error type for vidlink
#[derive(Debug, Error)]
pub enum VidlinkError {
    #[error("yt-dlp not found. Please install yt-dlp")]
    YtDlpNotFound,

    #[error("Failed to extract video info: {raw}")]
    Extraction { kind: ExtractErrorKind, raw: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl VidlinkError {
    /// Build an extraction error, classifying the raw yt-dlp output once at the boundary.
    pub fn extraction(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        VidlinkError::Extraction {
            kind: ExtractErrorKind::classify(&raw),
            raw,
        }
    }
}

/// User-facing categories for extraction failures.
///
/// yt-dlp reports failures as free-form text on stderr, so the raw message is
/// classified exactly once here; everything downstream matches on this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractErrorKind {
    PrivateOrLogin,
    Unavailable,
    GeoRestricted,
    AgeRestricted,
    CopyrightBlocked,
    Unknown,
}

impl ExtractErrorKind {
    /// Classify a raw yt-dlp failure message by substring, in priority order.
    pub fn classify(raw: &str) -> Self {
        let lowered = raw.to_lowercase();

        if raw.contains("Private video") || raw.contains("Sign in") {
            ExtractErrorKind::PrivateOrLogin
        } else if raw.contains("Video unavailable") {
            ExtractErrorKind::Unavailable
        } else if raw.contains("not made this video available in your country") {
            ExtractErrorKind::GeoRestricted
        } else if lowered.contains("age") {
            ExtractErrorKind::AgeRestricted
        } else if lowered.contains("copyright") {
            ExtractErrorKind::CopyrightBlocked
        } else {
            ExtractErrorKind::Unknown
        }
    }

    /// Localized message returned to API clients.
    pub fn user_message(&self) -> &'static str {
        match self {
            ExtractErrorKind::PrivateOrLogin => {
                "Este video es privado o requiere iniciar sesion."
            }
            ExtractErrorKind::Unavailable => "Este video no esta disponible.",
            ExtractErrorKind::GeoRestricted => {
                "Este video tiene restriccion geografica y no se puede descargar \
                 desde nuestro servidor. Proba con otro video."
            }
            ExtractErrorKind::AgeRestricted => "Este video tiene restriccion de edad.",
            ExtractErrorKind::CopyrightBlocked => "Este video fue bloqueado por derechos de autor.",
            ExtractErrorKind::Unknown => "No se pudo obtener el video. Intenta de nuevo mas tarde.",
        }
    }
}
