//! Fake TTS Client - 用于测试和离线运行的合成客户端
//!
//! 不调用外部服务，按请求参数生成确定性的伪 MP3 字节

use async_trait::async_trait;

use crate::application::ports::{
    SpeechSynthesizerPort, SynthesisError, SynthesisRequest, SynthesizedAudio,
};

/// Fake TTS Client
///
/// 输出对相同请求是确定的。可配置一个失败标记，
/// 文本包含该标记时模拟服务端失败（测试中注入故障用）。
pub struct FakeTtsClient {
    failure_marker: Option<String>,
}

impl FakeTtsClient {
    pub fn new() -> Self {
        Self {
            failure_marker: None,
        }
    }

    /// 文本包含 marker 时 synthesize 返回 ServiceError
    pub fn with_failure_marker(mut self, marker: impl Into<String>) -> Self {
        self.failure_marker = Some(marker.into());
        self
    }
}

impl Default for FakeTtsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizerPort for FakeTtsClient {
    async fn synthesize(
        &self,
        request: SynthesisRequest,
    ) -> Result<SynthesizedAudio, SynthesisError> {
        if let Some(marker) = &self.failure_marker {
            if request.text.contains(marker.as_str()) {
                return Err(SynthesisError::ServiceError(format!(
                    "Injected failure for text containing '{}'",
                    marker
                )));
            }
        }

        tracing::debug!(
            text_len = request.text.len(),
            voice = %request.voice,
            "FakeTtsClient: generating deterministic audio"
        );

        // 伪 MP3: ID3 头 + 请求参数字节，确定且非空
        let mut audio_data = b"ID3\x04\x00\x00\x00\x00\x00\x00".to_vec();
        audio_data.extend_from_slice(request.voice.as_bytes());
        audio_data.extend_from_slice(request.rate.as_bytes());
        audio_data.extend_from_slice(request.pitch.as_bytes());
        audio_data.extend_from_slice(request.text.as_bytes());

        Ok(SynthesizedAudio {
            audio_data,
            media_type: "audio/mpeg".to_string(),
        })
    }

    async fn health_check(&self) -> bool {
        true
    }
}
