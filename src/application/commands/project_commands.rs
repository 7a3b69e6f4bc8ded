//! Project Commands - 批量导出命令

use crate::domain::project::{ProjectName, TextBlock};
use crate::domain::voice::VoiceProfile;

/// 导出整个项目为一个压缩包
///
/// blocks 按界面顺序排列；空块被跳过但序号保留。
#[derive(Debug, Clone)]
pub struct ExportProject {
    pub project: ProjectName,
    pub blocks: Vec<TextBlock>,
    pub profile: VoiceProfile,
}
