//! HTTP server wiring
//!
//! A single JSON endpoint with permissive CORS; all state is one shared
//! extractor handle.

use std::sync::Arc;

use anyhow::Result;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::api::handlers::video_info;
use crate::extractor::traits::Extractor;
use crate::utils::config::ServerSettings;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<dyn Extractor>,
}

impl AppState {
    pub fn new(extractor: Arc<dyn Extractor>) -> Self {
        Self { extractor }
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/info", get(video_info))
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn run_server(settings: ServerSettings, state: AppState) -> Result<()> {
    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
