//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    DownloadBlockHandler, ExportProjectHandler, PreviewBlockHandler,
    // Query handlers
    ListVoicesHandler,
    // Ports
    ArchiveWriterPort, AudioStagingPort, AudioTranscoderPort, SpeechSynthesizerPort,
};
use crate::domain::voice::VoiceId;

/// 应用状态
pub struct AppState {
    // ========== Ports ==========
    pub synthesizer: Arc<dyn SpeechSynthesizerPort>,
    pub transcoder: Arc<dyn AudioTranscoderPort>,
    pub staging: Arc<dyn AudioStagingPort>,
    pub archive_writer: Arc<dyn ArchiveWriterPort>,

    // ========== Command Handlers ==========
    pub preview_handler: PreviewBlockHandler,
    pub download_handler: DownloadBlockHandler,
    pub export_handler: ExportProjectHandler,

    // ========== Query Handlers ==========
    pub list_voices_handler: ListVoicesHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        transcoder: Arc<dyn AudioTranscoderPort>,
        staging: Arc<dyn AudioStagingPort>,
        archive_writer: Arc<dyn ArchiveWriterPort>,
        voice_catalog: Vec<VoiceId>,
    ) -> Self {
        Self {
            // Command handlers
            preview_handler: PreviewBlockHandler::new(synthesizer.clone()),
            download_handler: DownloadBlockHandler::new(
                synthesizer.clone(),
                transcoder.clone(),
                staging.clone(),
            ),
            export_handler: ExportProjectHandler::new(
                synthesizer.clone(),
                transcoder.clone(),
                staging.clone(),
                archive_writer.clone(),
            ),

            // Query handlers
            list_voices_handler: ListVoicesHandler::new(voice_catalog),

            // Ports
            synthesizer,
            transcoder,
            staging,
            archive_writer,
        }
    }
}
