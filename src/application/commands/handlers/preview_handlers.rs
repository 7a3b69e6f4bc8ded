//! Preview Command Handler

use std::sync::Arc;

use crate::application::commands::PreviewBlock;
use crate::application::error::ApplicationError;
use crate::application::ports::{SpeechSynthesizerPort, SynthesisRequest};

/// 预览响应
///
/// 压缩音频留在内存中，由 HTTP 层编码为内联可播放形式。
#[derive(Debug, Clone)]
pub struct PreviewBlockResponse {
    pub audio_data: Vec<u8>,
    pub media_type: String,
}

/// PreviewBlock Handler
///
/// 渲染单块到内存，不落盘、不转码（预览只有压缩编码）。
pub struct PreviewBlockHandler {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
}

impl PreviewBlockHandler {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizerPort>) -> Self {
        Self { synthesizer }
    }

    pub async fn handle(
        &self,
        command: PreviewBlock,
    ) -> Result<PreviewBlockResponse, ApplicationError> {
        if command.text.trim().is_empty() {
            return Err(ApplicationError::validation("Block text cannot be empty"));
        }

        let request = SynthesisRequest::new(command.text, &command.profile);
        let audio = self.synthesizer.synthesize(request).await?;

        tracing::info!(
            voice = %command.profile.voice(),
            audio_size = audio.audio_data.len(),
            "Block preview rendered"
        );

        Ok(PreviewBlockResponse {
            audio_data: audio.audio_data,
            media_type: audio.media_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voice::{PitchOffset, RateOffset, VoiceId, VoiceProfile};
    use crate::infrastructure::adapters::FakeTtsClient;

    fn profile() -> VoiceProfile {
        VoiceProfile::new(
            VoiceId::new("pt-BR-AntonioNeural").unwrap(),
            RateOffset::default(),
            PitchOffset::default(),
        )
    }

    #[tokio::test]
    async fn test_preview_returns_compressed_audio() {
        let handler = PreviewBlockHandler::new(Arc::new(FakeTtsClient::new()));
        let response = handler
            .handle(PreviewBlock {
                text: "Olá mundo".to_string(),
                profile: profile(),
            })
            .await
            .unwrap();
        assert!(!response.audio_data.is_empty());
        assert_eq!(response.media_type, "audio/mpeg");
    }

    #[tokio::test]
    async fn test_preview_rejects_blank_text() {
        let handler = PreviewBlockHandler::new(Arc::new(FakeTtsClient::new()));
        let result = handler
            .handle(PreviewBlock {
                text: "   ".to_string(),
                profile: profile(),
            })
            .await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }
}
