//! Voice Context - 语音限界上下文
//!
//! 职责:
//! - 语音标识（外部服务的语音目录项）
//! - 语速/音调偏移及其 API 滤镜编码
//! - 会话级共享的语音配置

mod errors;
mod value_objects;

pub use errors::VoiceError;
pub use value_objects::{PitchOffset, RateOffset, VoiceId, VoiceProfile};
