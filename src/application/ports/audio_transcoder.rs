//! Audio Transcoder Port - 音频转码抽象
//!
//! 定义压缩产物到未压缩产物的转码接口。
//! 外部转码进程的退出码必须被检查，非零退出是类型化失败，不允许静默继续。

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// 转码错误
#[derive(Debug, Error)]
pub enum TranscodeError {
    #[error("Failed to spawn transcoder process: {0}")]
    Spawn(String),

    #[error("Transcoder exited with {status}: {stderr}")]
    ProcessFailed { status: String, stderr: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Audio Transcoder Port
///
/// 将一个压缩音频文件转码为未压缩文件。目标路径由调用方给出
/// （同名主干、不同编码目录），已存在的目标文件被覆盖（幂等重跑）。
#[async_trait]
pub trait AudioTranscoderPort: Send + Sync {
    /// 压缩 → 未压缩转码，阻塞到外部进程退出
    async fn transcode_to_wav(&self, src: &Path, dst: &Path) -> Result<(), TranscodeError>;
}
