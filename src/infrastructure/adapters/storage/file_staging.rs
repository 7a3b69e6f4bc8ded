//! File Staging - 文件系统音频暂存实现
//!
//! 实现 AudioStagingPort trait。每个会话（一次下载或导出请求）
//! 占用 `{root}/{uuid}` 下的独立目录树，按需懒创建，请求结束后整体删除。
//! 会话间不共享任何路径，并发请求不会互相覆盖。

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

use crate::application::ports::{AudioStagingPort, StagingError};
use crate::domain::export::AudioEncoding;

/// 文件系统音频暂存
pub struct FileStaging {
    /// 暂存根目录
    root: PathBuf,
}

impl FileStaging {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl AudioStagingPort for FileStaging {
    fn session_dir(&self, session_id: Uuid) -> PathBuf {
        self.root.join(session_id.to_string())
    }

    fn artifact_path(
        &self,
        session_id: Uuid,
        encoding: AudioEncoding,
        file_name: &str,
    ) -> PathBuf {
        self.session_dir(session_id)
            .join(encoding.dir_name())
            .join(file_name)
    }

    async fn prepare_dir(
        &self,
        session_id: Uuid,
        encoding: AudioEncoding,
    ) -> Result<PathBuf, StagingError> {
        let dir = self.session_dir(session_id).join(encoding.dir_name());
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| StagingError::IoError(e.to_string()))?;
        Ok(dir)
    }

    async fn save(
        &self,
        session_id: Uuid,
        encoding: AudioEncoding,
        file_name: &str,
        data: &[u8],
    ) -> Result<PathBuf, StagingError> {
        self.prepare_dir(session_id, encoding).await?;
        let path = self.artifact_path(session_id, encoding, file_name);

        fs::write(&path, data)
            .await
            .map_err(|e| StagingError::IoError(e.to_string()))?;

        tracing::debug!(
            session_id = %session_id,
            path = %path.display(),
            size = data.len(),
            "Staged audio artifact"
        );

        Ok(path)
    }

    async fn read(&self, path: &Path) -> Result<Vec<u8>, StagingError> {
        match fs::read(path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StagingError::FileNotFound(path.display().to_string()))
            }
            Err(e) => Err(StagingError::IoError(e.to_string())),
        }
    }

    async fn cleanup_session(&self, session_id: Uuid) -> Result<(), StagingError> {
        let dir = self.session_dir(session_id);
        match fs::remove_dir_all(&dir).await {
            Ok(()) => {
                tracing::debug!(session_id = %session_id, "Staging session cleaned");
                Ok(())
            }
            // 会话从未写过任何文件时目录不存在，不算错误
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StagingError::IoError(e.to_string())),
        }
    }
}
