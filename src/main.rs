//! vidlink - Video link resolver service
//!
//! A small HTTP service that accepts a video URL and answers with metadata
//! plus a direct download link, delegating extraction to yt-dlp.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use vidlink::api::{run_server, AppState};
use vidlink::extractor::{Extractor, YtDlpExtractor};
use vidlink::utils::ServerSettings;

#[derive(Parser)]
#[command(name = "vidlink", about = "Resolve video URLs into metadata and download links")]
struct Args {
    /// Interface to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Explicit yt-dlp binary path, overriding discovery
    #[arg(long)]
    ytdlp_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let settings = ServerSettings {
        host: args.host,
        port: args.port,
        ytdlp_path: args.ytdlp_path,
    };

    // Missing yt-dlp is not fatal at startup: the server comes up and every
    // extraction request reports the failure until the binary is installed.
    let extractor: Arc<dyn Extractor> = match YtDlpExtractor::new(settings.ytdlp_path.clone()) {
        Ok(extractor) => Arc::new(extractor),
        Err(err) => {
            warn!("{}", err);
            warn!("Install it with: pip install yt-dlp (or your package manager)");
            Arc::new(YtDlpExtractor::with_path(PathBuf::from("yt-dlp")))
        }
    };

    run_server(settings, AppState::new(extractor)).await
}
