//! Archive Writer Port - 压缩包写出抽象
//!
//! 将一个导出包渲染为内存中的压缩包字节

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::export::ExportBundle;
use crate::domain::project::ProjectName;

/// 压缩包错误
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("Archive write error: {0}")]
    WriteError(String),
}

/// Archive Writer Port
///
/// 空包也是合法输入，产出一个有效的空压缩包。
#[async_trait]
pub trait ArchiveWriterPort: Send + Sync {
    /// 渲染导出包: 布局 `{project}/{mp3|wav}/{name}.{ext}`，保持插入顺序
    async fn write_archive(
        &self,
        project: &ProjectName,
        bundle: &ExportBundle,
    ) -> Result<Vec<u8>, ArchiveError>;
}
