//! Export Command Handler - 批量导出

use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::ExportProject;
use crate::application::error::ApplicationError;
use crate::application::ports::{
    ArchiveWriterPort, AudioStagingPort, AudioTranscoderPort, SpeechSynthesizerPort,
    SynthesisRequest,
};
use crate::domain::export::{AudioArtifact, AudioEncoding, ExportBundle};

/// 导出响应
#[derive(Debug, Clone)]
pub struct ExportProjectResponse {
    /// 内存中的压缩包字节
    pub archive: Vec<u8>,
    /// 建议的下载文件名
    pub file_name: String,
    /// 压缩包内条目数（mp3 + wav）
    pub entry_count: usize,
}

/// ExportProject Handler
///
/// 按块序号顺序逐块渲染（合成 → 暂存 → 转码），跳过空块但保留序号，
/// 全部成功后一次性写出压缩包。任何一块失败都放弃整个批次，
/// 不返回部分压缩包。
pub struct ExportProjectHandler {
    synthesizer: Arc<dyn SpeechSynthesizerPort>,
    transcoder: Arc<dyn AudioTranscoderPort>,
    staging: Arc<dyn AudioStagingPort>,
    archive_writer: Arc<dyn ArchiveWriterPort>,
}

impl ExportProjectHandler {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizerPort>,
        transcoder: Arc<dyn AudioTranscoderPort>,
        staging: Arc<dyn AudioStagingPort>,
        archive_writer: Arc<dyn ArchiveWriterPort>,
    ) -> Self {
        Self {
            synthesizer,
            transcoder,
            staging,
            archive_writer,
        }
    }

    pub async fn handle(
        &self,
        command: ExportProject,
    ) -> Result<ExportProjectResponse, ApplicationError> {
        let session_id = Uuid::new_v4();
        let result = self.export(session_id, &command).await;

        if let Err(e) = self.staging.cleanup_session(session_id).await {
            tracing::warn!(session_id = %session_id, error = %e, "Failed to clean staging session");
        }

        result
    }

    async fn export(
        &self,
        session_id: Uuid,
        command: &ExportProject,
    ) -> Result<ExportProjectResponse, ApplicationError> {
        let mut bundle = ExportBundle::new();

        for block in &command.blocks {
            if block.is_blank() {
                tracing::debug!(index = %block.index(), "Skipping blank block");
                continue;
            }

            let stem = block.artifact_stem(&command.project);

            let request = SynthesisRequest::new(block.text(), &command.profile);
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

            bundle.push(AudioArtifact::new(&stem, AudioEncoding::Mp3, audio.audio_data))?;
            bundle.push(AudioArtifact::new(&stem, AudioEncoding::Wav, wav_data))?;

            tracing::debug!(session_id = %session_id, stem = %stem, "Block rendered for export");
        }

        let archive = self
            .archive_writer
            .write_archive(&command.project, &bundle)
            .await?;

        tracing::info!(
            session_id = %session_id,
            project = %command.project,
            entries = bundle.len(),
            archive_size = archive.len(),
            "Project export completed"
        );

        Ok(ExportProjectResponse {
            archive,
            file_name: format!("{}_audios_lote.zip", command.project),
            entry_count: bundle.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::project::{ProjectName, TextBlock};
    use crate::domain::voice::{PitchOffset, RateOffset, VoiceId, VoiceProfile};
    use crate::infrastructure::adapters::{FakeTtsClient, FileStaging, ZipBundler};
    use async_trait::async_trait;
    use std::io::Read;
    use std::path::Path;

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

    fn profile() -> VoiceProfile {
        VoiceProfile::new(
            VoiceId::new("pt-BR-AntonioNeural").unwrap(),
            RateOffset::default(),
            PitchOffset::default(),
        )
    }

    fn command(texts: &[&str]) -> ExportProject {
        ExportProject {
            project: ProjectName::new("demo").unwrap(),
            blocks: TextBlock::from_texts(texts.iter().copied()).unwrap(),
            profile: profile(),
        }
    }

    fn handler(root: &Path, synthesizer: Arc<dyn SpeechSynthesizerPort>) -> ExportProjectHandler {
        ExportProjectHandler::new(
            synthesizer,
            Arc::new(CopyTranscoder),
            Arc::new(FileStaging::new(root.to_path_buf())),
            Arc::new(ZipBundler::new()),
        )
    }

    fn archive_names(archive: &[u8]) -> Vec<String> {
        let reader = std::io::Cursor::new(archive);
        let mut zip = zip::ZipArchive::new(reader).unwrap();
        (0..zip.len())
            .map(|i| zip.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_export_skips_blank_blocks_and_keeps_index_gaps() {
        let tmp = tempfile::TempDir::new().unwrap();
        let handler = handler(tmp.path(), Arc::new(FakeTtsClient::new()));

        let response = handler
            .handle(command(&["Hello", "", "World"]))
            .await
            .unwrap();

        assert_eq!(response.entry_count, 4);
        assert_eq!(response.file_name, "demo_audios_lote.zip");
        assert_eq!(
            archive_names(&response.archive),
            vec![
                "demo/mp3/demo_voz_1.mp3",
                "demo/wav/demo_voz_1.wav",
                "demo/mp3/demo_voz_3.mp3",
                "demo/wav/demo_voz_3.wav",
            ]
        );
    }

    #[tokio::test]
    async fn test_export_all_blank_yields_valid_empty_archive() {
        let tmp = tempfile::TempDir::new().unwrap();
        let handler = handler(tmp.path(), Arc::new(FakeTtsClient::new()));

        let response = handler.handle(command(&["", "  ", "\n"])).await.unwrap();
        assert_eq!(response.entry_count, 0);
        assert!(archive_names(&response.archive).is_empty());
    }

    #[tokio::test]
    async fn test_every_wav_entry_has_mp3_sibling() {
        let tmp = tempfile::TempDir::new().unwrap();
        let handler = handler(tmp.path(), Arc::new(FakeTtsClient::new()));

        let response = handler.handle(command(&["um", "dois"])).await.unwrap();
        let names = archive_names(&response.archive);
        for name in names.iter().filter(|n| n.starts_with("demo/wav/")) {
            let sibling = name
                .replace("demo/wav/", "demo/mp3/")
                .replace(".wav", ".mp3");
            assert!(names.contains(&sibling), "missing sibling for {}", name);
        }
    }

    #[tokio::test]
    async fn test_synthesis_failure_aborts_whole_batch() {
        let tmp = tempfile::TempDir::new().unwrap();
        let synthesizer = Arc::new(FakeTtsClient::new().with_failure_marker("FALHA"));
        let handler = handler(tmp.path(), synthesizer);

        let result = handler.handle(command(&["um", "FALHA aqui", "três"])).await;
        assert!(matches!(result, Err(ApplicationError::SynthesisFailure(_))));

        // 失败后暂存目录也被清理
        let leftover = std::fs::read_dir(tmp.path()).unwrap().count();
        assert_eq!(leftover, 0);
    }

    #[tokio::test]
    async fn test_export_archive_is_readable_zip() {
        let tmp = tempfile::TempDir::new().unwrap();
        let handler = handler(tmp.path(), Arc::new(FakeTtsClient::new()));

        let response = handler.handle(command(&["conteúdo"])).await.unwrap();
        let reader = std::io::Cursor::new(&response.archive);
        let mut zip = zip::ZipArchive::new(reader).unwrap();
        let mut file = zip.by_name("demo/mp3/demo_voz_1.mp3").unwrap();
        let mut data = Vec::new();
        file.read_to_end(&mut data).unwrap();
        assert!(!data.is_empty());
    }
}
