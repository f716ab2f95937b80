//! Format preference selection

use serde::{Deserialize, Deserializer};

/// Requested output flavor, mapped from the `format` query parameter.
///
/// Anything other than the literal `audio` falls back to the default video
/// preference, including absent or unrecognized values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatChoice {
    #[default]
    Mp4,
    Audio,
}

impl FormatChoice {
    /// Map the raw query parameter value.
    pub fn from_param(value: &str) -> Self {
        match value {
            "audio" => FormatChoice::Audio,
            _ => FormatChoice::Mp4,
        }
    }

    /// yt-dlp format preference string: preferred container first, then best available.
    pub fn selector(&self) -> &'static str {
        match self {
            FormatChoice::Audio => "bestaudio[ext=m4a]/bestaudio",
            FormatChoice::Mp4 => "best[ext=mp4]/best",
        }
    }

    /// Extension reported when the extractor omits one.
    pub fn default_ext(&self) -> &'static str {
        match self {
            FormatChoice::Audio => "m4a",
            FormatChoice::Mp4 => "mp4",
        }
    }
}

impl<'de> Deserialize<'de> for FormatChoice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(FormatChoice::from_param(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn audio_param_selects_audio() {
        assert_eq!(FormatChoice::from_param("audio"), FormatChoice::Audio);
    }

    #[test]
    fn anything_else_selects_mp4() {
        assert_eq!(FormatChoice::from_param("mp4"), FormatChoice::Mp4);
        assert_eq!(FormatChoice::from_param("webm"), FormatChoice::Mp4);
        assert_eq!(FormatChoice::from_param(""), FormatChoice::Mp4);
        assert_eq!(FormatChoice::from_param("AUDIO"), FormatChoice::Mp4);
    }

    #[test]
    fn default_is_mp4() {
        assert_eq!(FormatChoice::default(), FormatChoice::Mp4);
    }

    #[test]
    fn selectors_prefer_container_then_best() {
        assert_eq!(FormatChoice::Audio.selector(), "bestaudio[ext=m4a]/bestaudio");
        assert_eq!(FormatChoice::Mp4.selector(), "best[ext=mp4]/best");
    }

    #[test]
    fn default_extensions_match_choice() {
        assert_eq!(FormatChoice::Audio.default_ext(), "m4a");
        assert_eq!(FormatChoice::Mp4.default_ext(), "mp4");
    }

    #[test]
    fn deserializes_from_query_value() {
        let choice: FormatChoice = serde_json::from_str("\"audio\"").unwrap();
        assert_eq!(choice, FormatChoice::Audio);
        let choice: FormatChoice = serde_json::from_str("\"flac\"").unwrap();
        assert_eq!(choice, FormatChoice::Mp4);
    }
}
