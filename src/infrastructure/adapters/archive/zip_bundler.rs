//! Zip Bundler - 基于 zip crate 的压缩包写出
//!
//! 实现 ArchiveWriterPort trait。压缩包完全在内存中构建，
//! 布局 `{project}/{mp3|wav}/{name}.{ext}`，条目顺序即插入顺序。

use async_trait::async_trait;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::application::ports::{ArchiveError, ArchiveWriterPort};
use crate::domain::export::ExportBundle;
use crate::domain::project::ProjectName;

/// ZIP 压缩包写出器
#[derive(Debug, Default)]
pub struct ZipBundler;

impl ZipBundler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ArchiveWriterPort for ZipBundler {
    async fn write_archive(
        &self,
        project: &ProjectName,
        bundle: &ExportBundle,
    ) -> Result<Vec<u8>, ArchiveError> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        // 音频已经压缩过，Deflate 对 mp3 收益有限但对 wav 有效
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for artifact in bundle.artifacts() {
            let entry = artifact.archive_path(project);
            writer
                .start_file(entry.as_str(), options)
                .map_err(|e| ArchiveError::WriteError(e.to_string()))?;
            writer
                .write_all(artifact.data())
                .map_err(|e| ArchiveError::WriteError(e.to_string()))?;
        }

        let cursor = writer
            .finish()
            .map_err(|e| ArchiveError::WriteError(e.to_string()))?;
        let data = cursor.into_inner();

        tracing::debug!(
            project = %project,
            entries = bundle.len(),
            archive_size = data.len(),
            "Archive written"
        );

        Ok(data)
    }
}
