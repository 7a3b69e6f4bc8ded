//! Ffmpeg Transcoder - 通过外部 ffmpeg 进程转码
//!
//! 实现 AudioTranscoderPort trait。`-y` 覆盖已存在的目标文件（幂等重跑），
//! 退出码总是被检查，非零退出连同捕获的 stderr 一起上抛。

use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;

use crate::application::ports::{AudioTranscoderPort, TranscodeError};

/// Ffmpeg 转码器配置
#[derive(Debug, Clone)]
pub struct FfmpegTranscoderConfig {
    /// ffmpeg 可执行文件路径
    pub ffmpeg_path: String,
}

impl Default for FfmpegTranscoderConfig {
    fn default() -> Self {
        Self {
            ffmpeg_path: "ffmpeg".to_string(),
        }
    }
}

/// Ffmpeg 转码器
pub struct FfmpegTranscoder {
    config: FfmpegTranscoderConfig,
}

impl FfmpegTranscoder {
    pub fn new(config: FfmpegTranscoderConfig) -> Self {
        Self { config }
    }

    pub fn with_default_config() -> Self {
        Self::new(FfmpegTranscoderConfig::default())
    }
}

#[async_trait]
impl AudioTranscoderPort for FfmpegTranscoder {
    async fn transcode_to_wav(&self, src: &Path, dst: &Path) -> Result<(), TranscodeError> {
        if !src.exists() {
            return Err(TranscodeError::InvalidInput(format!(
                "Source file does not exist: {}",
                src.display()
            )));
        }

        tracing::debug!(
            src = %src.display(),
            dst = %dst.display(),
            "Spawning ffmpeg"
        );

        let output = Command::new(&self.config.ffmpeg_path)
            .arg("-y")
            .arg("-hide_banner")
            .arg("-loglevel")
            .arg("error")
            .arg("-i")
            .arg(src)
            .arg(dst)
            .output()
            .await
            .map_err(|e| TranscodeError::Spawn(format!("{}: {}", self.config.ffmpeg_path, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            tracing::error!(
                src = %src.display(),
                status = %output.status,
                stderr = %stderr,
                "ffmpeg failed"
            );
            return Err(TranscodeError::ProcessFailed {
                status: output.status.to_string(),
                stderr,
            });
        }

        tracing::debug!(dst = %dst.display(), "Transcode completed");
        Ok(())
    }
}
