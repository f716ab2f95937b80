pub mod handlers;
pub mod server;

pub use handlers::{ApiError, InfoQuery, VideoResponse};
pub use server::{router, run_server, AppState};
