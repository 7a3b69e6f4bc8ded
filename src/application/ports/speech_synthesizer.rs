//! Speech Synthesizer Port - 语音合成抽象
//!
//! 定义远程神经 TTS 服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::voice::VoiceProfile;

/// 合成错误
#[derive(Debug, Error)]
pub enum SynthesisError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Voice not found: {0}")]
    VoiceNotFound(String),
}

/// 合成请求
///
/// 每次渲染构造一个。rate/pitch 是已归一化的滤镜字符串（`+0%` / `+0Hz`）。
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本内容
    pub text: String,
    /// 语音标识
    pub voice: String,
    /// 语速滤镜字符串
    pub rate: String,
    /// 音调滤镜字符串
    pub pitch: String,
}

impl SynthesisRequest {
    /// 从文本和语音配置构造请求
    pub fn new(text: impl Into<String>, profile: &VoiceProfile) -> Self {
        let (rate, pitch) = profile.filters();
        Self {
            text: text.into(),
            voice: profile.voice().to_string(),
            rate,
            pitch,
        }
    }
}

/// 合成结果
#[derive(Debug, Clone)]
pub struct SynthesizedAudio {
    /// 压缩音频数据（MP3）
    pub audio_data: Vec<u8>,
    /// 媒体类型
    pub media_type: String,
}

/// Speech Synthesizer Port
///
/// 外部 TTS 服务的抽象接口。一次调用一个合成请求，
/// 失败即失败——不重试、不流式、不降级。
///
/// 前置条件: 调用方必须先跳过空/纯空白文本，端口内部不处理。
#[async_trait]
pub trait SpeechSynthesizerPort: Send + Sync {
    /// 执行一次语音合成，返回压缩音频字节
    async fn synthesize(&self, request: SynthesisRequest)
        -> Result<SynthesizedAudio, SynthesisError>;

    /// 检查合成服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
