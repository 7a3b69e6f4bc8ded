//! Download Command Handler

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::DownloadBlock;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    AudioStagingPort, AudioTranscoderPort, SpeechSynthesizerPort, SynthesisRequest,
};
use crate::domain::export::{AudioArtifact, AudioEncoding};

/// 下载响应 - 一对产物
#[derive(Debug, Clone)]
pub struct DownloadBlockResponse {
    pub mp3: AudioArtifact,
    pub wav: AudioArtifact,
}

/// DownloadBlock Handler
///
/// 渲染单块为压缩 + 未压缩一对: 合成到会话暂存目录、转码、
/// 读回内存后清理会话目录。重复调用对同一块是幂等的（覆盖写）。
pub struct DownloadBlockHandler {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    transcoder: Arc<dyn AudioTranscoderPort>,
    staging: Arc<dyn AudioStagingPort>,
}

impl DownloadBlockHandler {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        transcoder: Arc<dyn AudioTranscoderPort>,
        staging: Arc<dyn AudioStagingPort>,
    ) -> Self {
        Self {
            synthesizer,
            transcoder,
            staging,
        }
    }

    pub async fn handle(
        &self,
        command: DownloadBlock,
    ) -> Result<DownloadBlockResponse, ApplicationError> {
        if command.block.is_blank() {
            return Err(ApplicationError::validation("Block text cannot be empty"));
        }

        let session_id = Uuid::new_v4();
        let result = self.render_pair(session_id, &command).await;

        // 成功与否都清理会话目录，产物已在内存中
        if let Err(e) = self.staging.cleanup_session(session_id).await {
            tracing::warn!(session_id = %session_id, error = %e, "Failed to clean staging session");
        }

        result
    }

    async fn render_pair(
        &self,
        session_id: Uuid,
        command: &DownloadBlock,
    ) -> Result<DownloadBlockResponse, ApplicationError> {
        let stem = command.block.artifact_stem(&command.project);

        let request = SynthesisRequest::new(command.block.text(), &command.profile);
        let audio = self.synthesizer.synthesize(request).await?;

        let mp3_name = format!("{}.mp3", stem);
        let mp3_path = self
            .staging
            .save(session_id, AudioEncoding::Mp3, &mp3_name, &audio.audio_data)
            .await?;

        let wav_name = format!("{}.wav", stem);
        self.staging
            .prepare_dir(session_id, AudioEncoding::Wav)
            .await?;
        let wav_path = self
            .staging
            .artifact_path(session_id, AudioEncoding::Wav, &wav_name);

        self.transcoder.transcode_to_wav(&mp3_path, &wav_path).await?;
        let wav_data = self.staging.read(&wav_path).await?;

        tracing::info!(
            session_id = %session_id,
            stem = %stem,
            mp3_size = audio.audio_data.len(),
            wav_size = wav_data.len(),
            "Block download pair rendered"
        );

        Ok(DownloadBlockResponse {
            mp3: AudioArtifact::new(&stem, AudioEncoding::Mp3, audio.audio_data),
            wav: AudioArtifact::new(&stem, AudioEncoding::Wav, wav_data),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::{BlockIndex, ProjectName, TextBlock};
    use crate::domain::voice::{PitchOffset, RateOffset, VoiceId, VoiceProfile};
    use crate::infrastructure::adapters::{FakeTtsClient, FileStaging};
    use async_trait::async_trait;
    use std::path::Path;

    /// 测试用转码器: 原样复制字节
    struct CopyTranscoder;

    #[async_trait]
    impl AudioTranscoderPort for CopyTranscoder {
        async fn transcode_to_wav(
            &self,
            src: &Path,
            dst: &Path,
        ) -> Result<(), crate::application::ports::TranscodeError> {
            let data = tokio::fs::read(src).await.map_err(|e| {
                crate::application::ports::TranscodeError::IoError(e.to_string())
            })?;
            tokio::fs::write(dst, data).await.map_err(|e| {
                crate::application::ports::TranscodeError::IoError(e.to_string())
            })
        }
    }

    fn command(text: &str) -> DownloadBlock {
        DownloadBlock {
            project: ProjectName::new("demo").unwrap(),
            block: TextBlock::new(BlockIndex::new(2).unwrap(), text),
            profile: VoiceProfile::new(
                VoiceId::new("pt-BR-AntonioNeural").unwrap(),
                RateOffset::default(),
                PitchOffset::default(),
            ),
        }
    }

    fn handler(root: &Path) -> DownloadBlockHandler {
        DownloadBlockHandler::new(
            Arc::new(FakeTtsClient::new()),
            Arc::new(CopyTranscoder),
            Arc::new(FileStaging::new(root.to_path_buf())),
        )
    }

    #[tokio::test]
    async fn test_download_produces_pair_and_cleans_staging() {
        let tmp = tempfile::TempDir::new().unwrap();
        let handler = handler(tmp.path());

        let response = handler.handle(command("Olá")).await.unwrap();
        assert_eq!(response.mp3.file_name(), "demo_voz_2.mp3");
        assert_eq!(response.wav.file_name(), "demo_voz_2.wav");
        assert!(!response.mp3.data().is_empty());
        assert_eq!(response.mp3.data(), response.wav.data());

        // 会话目录已被清理
        let leftover = std::fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(leftover, 0);
    }

    #[tokio::test]
    async fn test_download_is_idempotent() {
        let tmp = tempfile::TempDir::new().unwrap();
        let handler = handler(tmp.path());

        let first = handler.handle(command("Olá")).await.unwrap();
        let second = handler.handle(command("Olá")).await.unwrap();
        assert_eq!(first.mp3.file_name(), second.mp3.file_name());
        assert_eq!(first.mp3.data(), second.mp3.data());
        assert_eq!(first.wav.data(), second.wav.data());
    }

    #[tokio::test]
    async fn test_download_rejects_blank_block() {
        let tmp = tempfile::TempDir::new().unwrap();
        let handler = handler(tmp.path());
        let result = handler.handle(command("  ")).await;
        assert!(matches!(result, Err(ApplicationError::ValidationError(_))));
    }
}
