//! Command Handlers

mod download_handlers;
mod export_handlers;
mod preview_handlers;

pub use download_handlers::{DownloadBlockHandler, DownloadBlockResponse};
pub use export_handlers::{ExportProjectHandler, ExportProjectResponse};
pub use preview_handlers::{PreviewBlockHandler, PreviewBlockResponse};
