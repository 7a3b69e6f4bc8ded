//! Audio Staging Port - 音频暂存抽象
//!
//! 管理会话作用域的临时音频文件。每次导出/下载请求对应一个独立的
//! 会话目录，按需懒创建，请求结束后整体清理，并发请求互不干扰。

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;

use crate::domain::export::AudioEncoding;

/// 暂存错误
#[derive(Debug, Error)]
pub enum StagingError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Audio Staging Port
///
/// 路径约定: `{root}/{session}/{mp3|wav}/{file_name}`
#[async_trait]
pub trait AudioStagingPort: Send + Sync {
    /// 会话根目录
    fn session_dir(&self, session_id: Uuid) -> PathBuf;

    /// 某个产物在会话内的目标路径（不创建文件）
    fn artifact_path(&self, session_id: Uuid, encoding: AudioEncoding, file_name: &str)
        -> PathBuf;

    /// 确保编码分组目录存在，返回目录路径
    async fn prepare_dir(
        &self,
        session_id: Uuid,
        encoding: AudioEncoding,
    ) -> Result<PathBuf, StagingError>;

    /// 保存产物字节（懒创建目录，覆盖已存在文件），返回写入路径
    async fn save(
        &self,
        session_id: Uuid,
        encoding: AudioEncoding,
        file_name: &str,
        data: &[u8],
    ) -> Result<PathBuf, StagingError>;

    /// 读回产物字节
    async fn read(&self, path: &Path) -> Result<Vec<u8>, StagingError>;

    /// 删除整个会话目录
    async fn cleanup_session(&self, session_id: Uuid) -> Result<(), StagingError>;
}
