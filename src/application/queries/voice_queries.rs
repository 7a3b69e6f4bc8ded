//! Voice Queries

/// 列出可用语音目录
#[derive(Debug, Clone, Default)]
pub struct ListVoices;
