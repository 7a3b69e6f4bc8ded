//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::voice::{PitchOffset, RateOffset, VoiceId, VoiceProfile};
use crate::infrastructure::http::error::ApiError;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应格式
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub errno: i32,
    pub error: String,
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 成功响应
    pub fn success(data: T) -> Self {
        Self {
            errno: 0,
            error: String::new(),
            data: Some(data),
        }
    }
}

// ============================================================================
// Voice DTOs
// ============================================================================

/// 共享的语音配置字段（preview / download / export 请求都携带）
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceProfileDto {
    pub voice: String,
    #[serde(default)]
    pub rate: i16,
    #[serde(default)]
    pub pitch: i16,
}

impl VoiceProfileDto {
    /// 解析为领域对象，越界值在这里被拦截
    pub fn into_profile(self) -> Result<VoiceProfile, ApiError> {
        let voice = VoiceId::new(self.voice).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        let rate = RateOffset::new(self.rate).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        let pitch = PitchOffset::new(self.pitch).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        Ok(VoiceProfile::new(voice, rate, pitch))
    }
}

#[derive(Debug, Serialize)]
pub struct VoiceListResponse {
    pub voices: Vec<String>,
}

// ============================================================================
// Block DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub text: String,
    #[serde(flatten)]
    pub profile: VoiceProfileDto,
}

#[derive(Debug, Serialize)]
pub struct PreviewResponse {
    /// 内联可播放的 data URI（base64 编码的压缩音频）
    pub audio: String,
    pub media_type: String,
    pub size: usize,
}

#[derive(Debug, Deserialize)]
pub struct DownloadRequest {
    pub project: String,
    /// 块在界面上的 1 起始序号
    pub index: usize,
    pub text: String,
    #[serde(flatten)]
    pub profile: VoiceProfileDto,
}

#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub mp3_name: String,
    pub mp3_base64: String,
    pub wav_name: String,
    pub wav_base64: String,
}

// ============================================================================
// Export DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub project: String,
    /// 按界面顺序排列的块文本，空串占位（保留序号）
    pub blocks: Vec<String>,
    #[serde(flatten)]
    pub profile: VoiceProfileDto,
}
