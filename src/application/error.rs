//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::{ArchiveError, StagingError, SynthesisError, TranscodeError};
use crate::domain::export::BundleError;
use crate::domain::project::ProjectError;
use crate::domain::voice::VoiceError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误（空项目名、空文本等，在进入管线前被拦截）
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 合成服务失败
    #[error("Synthesis failed: {0}")]
    SynthesisFailure(#[from] SynthesisError),

    /// 外部转码进程失败
    #[error("Transcode failed: {0}")]
    TranscodeFailure(#[from] TranscodeError),

    /// 暂存目录失败
    #[error("Staging error: {0}")]
    StagingFailure(#[from] StagingError),

    /// 压缩包写出失败
    #[error("Archive error: {0}")]
    ArchiveFailure(#[from] ArchiveError),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<ProjectError> for ApplicationError {
    fn from(err: ProjectError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<VoiceError> for ApplicationError {
    fn from(err: VoiceError) -> Self {
        Self::ValidationError(err.to_string())
    }
}

impl From<BundleError> for ApplicationError {
    fn from(err: BundleError) -> Self {
        // 孤儿/重复产物只能由管线自身的 bug 产生
        Self::InternalError(err.to_string())
    }
}
