//! Block Commands - 单块操作命令

use crate::domain::project::{ProjectName, TextBlock};
use crate::domain::voice::VoiceProfile;

/// 预览单个文本块（仅压缩编码，内存中返回）
#[derive(Debug, Clone)]
pub struct PreviewBlock {
    pub text: String,
    pub profile: VoiceProfile,
}

/// 下载单个文本块（压缩 + 未压缩一对）
#[derive(Debug, Clone)]
pub struct DownloadBlock {
    pub project: ProjectName,
    pub block: TextBlock,
    pub profile: VoiceProfile,
}
