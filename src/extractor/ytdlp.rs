//! yt-dlp wrapper for video metadata extraction
//!
//! Runs the yt-dlp binary in metadata-only mode and parses its JSON output.
//! Supports an explicit binary path, system PATH lookup, and common install
//! locations.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, error, info, warn};

use crate::extractor::format::FormatChoice;
use crate::extractor::models::ExtractedInfo;
use crate::extractor::traits::Extractor;
use crate::utils::error::VidlinkError;

/// Video metadata extractor backed by the yt-dlp binary
pub struct YtDlpExtractor {
    ytdlp_path: PathBuf,
}

impl YtDlpExtractor {
    /// Initialize the extractor, verifying yt-dlp availability
    ///
    /// Search order:
    /// 1. Explicit override path (from settings)
    /// 2. System PATH
    /// 3. Common installation paths (Homebrew, pip user installs, etc.)
    pub fn new(override_path: Option<PathBuf>) -> Result<Self, VidlinkError> {
        if let Some(path) = override_path {
            if path.is_file() {
                info!("Using configured yt-dlp at: {}", path.display());
                return Ok(Self { ytdlp_path: path });
            }
            warn!("Configured yt-dlp path does not exist: {}", path.display());
            return Err(VidlinkError::YtDlpNotFound);
        }

        match find_ytdlp() {
            Some(path) => {
                info!("Found yt-dlp at: {}", path.display());
                Ok(Self { ytdlp_path: path })
            }
            None => {
                error!("yt-dlp not found anywhere!");
                Err(VidlinkError::YtDlpNotFound)
            }
        }
    }

    /// Build an extractor around an unverified path.
    ///
    /// Used when startup discovery fails: the server still comes up and each
    /// extraction attempt reports the failure instead.
    pub fn with_path(path: PathBuf) -> Self {
        Self { ytdlp_path: path }
    }

    /// Path of the yt-dlp binary in use
    pub fn ytdlp_path(&self) -> &PathBuf {
        &self.ytdlp_path
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    fn id(&self) -> &'static str {
        "ytdlp"
    }

    /// Extract video metadata without downloading
    /// Uses: yt-dlp --dump-json --no-download --quiet --no-warnings --no-color -f <selector>
    async fn extract_info(
        &self,
        url: &str,
        format: FormatChoice,
    ) -> Result<ExtractedInfo, VidlinkError> {
        debug!(
            "Extracting info for {} with format selector {}",
            url,
            format.selector()
        );

        let output = Command::new(&self.ytdlp_path)
            .arg("--dump-json")
            .arg("--no-download")
            .arg("--quiet")
            .arg("--no-warnings")
            .arg("--no-color")
            .arg("-f")
            .arg(format.selector())
            .arg(url)
            .output()
            .await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("yt-dlp extraction failed: {}", stderr);
            return Err(VidlinkError::extraction(stderr));
        }

        let info: ExtractedInfo = serde_json::from_slice(&output.stdout)?;
        Ok(info)
    }
}

// ============================================================
// yt-dlp Detection Functions
// ============================================================

/// Find the yt-dlp binary: system PATH first, then common install locations.
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Some(system) = find_in_path() {
        debug!("Using system yt-dlp: {:?}", system);
        return Some(system);
    }

    if let Some(common) = find_in_common_paths() {
        debug!("Using yt-dlp from common path: {:?}", common);
        return Some(common);
    }

    warn!("yt-dlp not found in PATH or common locations");
    None
}

/// Find yt-dlp in the system PATH
fn find_in_path() -> Option<PathBuf> {
    let path = which::which("yt-dlp").ok()?;
    path.exists().then_some(path)
}

/// Find yt-dlp in common installation paths
fn find_in_common_paths() -> Option<PathBuf> {
    let common_paths = [
        // Linux system / distro packages
        "/usr/bin/yt-dlp",
        "/usr/local/bin/yt-dlp",
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // pip user install
        "~/.local/bin/yt-dlp",
    ];

    for path_str in common_paths {
        let expanded = if let Some(rest) = path_str.strip_prefix("~/") {
            match dirs::home_dir() {
                Some(home) => home.join(rest),
                None => continue,
            }
        } else {
            PathBuf::from(path_str)
        };

        if expanded.is_file() && is_executable(&expanded) {
            return Some(expanded);
        }
    }

    None
}

/// Check if a file is executable
fn is_executable(path: &PathBuf) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        if let Ok(metadata) = std::fs::metadata(path) {
            return metadata.permissions().mode() & 0o111 != 0;
        }
        false
    }

    #[cfg(not(unix))]
    {
        path.exists()
    }
}

// ============================================================
// Tests
// ============================================================
