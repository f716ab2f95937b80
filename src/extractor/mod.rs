pub mod format;
pub mod models;
pub mod traits;
pub mod ytdlp;

pub use format::FormatChoice;
pub use models::{ExtractedInfo, FormatEntry};
pub use traits::Extractor;
pub use ytdlp::YtDlpExtractor;
