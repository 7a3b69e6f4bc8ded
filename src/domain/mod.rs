//! Domain Layer - 领域层
//!
//! 包含三个限界上下文:
//! - Project Context: 项目与文本块管理
//! - Voice Context: 语音配置与合成滤镜
//! - Export Context: 音频产物与导出包

pub mod export;
pub mod project;
pub mod voice;
