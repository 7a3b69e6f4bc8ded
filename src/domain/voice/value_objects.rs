//! Voice Context - Value Objects

use serde::{Deserialize, Serialize};

use super::VoiceError;

/// 语音标识
///
/// 外部 TTS 服务的语音目录项（如 "pt-BR-AntonioNeural"）。
/// 目录由配置提供，这里只保证非空。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new(id: impl Into<String>) -> Result<Self, VoiceError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(VoiceError::EmptyVoiceId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 语速偏移（百分比）
///
/// 不变量: 取值范围 [-100, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateOffset(i16);

impl RateOffset {
    pub const MIN: i16 = -100;
    pub const MAX: i16 = 100;

    pub fn new(percent: i16) -> Result<Self, VoiceError> {
        if !(Self::MIN..=Self::MAX).contains(&percent) {
            return Err(VoiceError::RateOutOfRange(percent));
        }
        Ok(Self(percent))
    }

    pub fn value(&self) -> i16 {
        self.0
    }

    /// 编码为 TTS 服务要求的带符号字符串
    ///
    /// 非负值带 "+" 前缀: `+12%`，负值自带符号: `-30%`
    pub fn encode(&self) -> String {
        if self.0 >= 0 {
            format!("+{}%", self.0)
        } else {
            format!("{}%", self.0)
        }
    }
}

impl Default for RateOffset {
    fn default() -> Self {
        Self(0)
    }
}

/// 音调偏移（半音，服务端以 Hz 为单位标记）
///
/// 不变量: 取值范围 [-20, 20]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchOffset(i16);

impl PitchOffset {
    pub const MIN: i16 = -20;
    pub const MAX: i16 = 20;

    pub fn new(semitones: i16) -> Result<Self, VoiceError> {
        if !(Self::MIN..=Self::MAX).contains(&semitones) {
            return Err(VoiceError::PitchOutOfRange(semitones));
        }
        Ok(Self(semitones))
    }

    pub fn value(&self) -> i16 {
        self.0
    }

    /// 编码为带符号字符串: `+5Hz` / `-3Hz`
    pub fn encode(&self) -> String {
        if self.0 >= 0 {
            format!("+{}Hz", self.0)
        } else {
            format!("{}Hz", self.0)
        }
    }
}

impl Default for PitchOffset {
    fn default() -> Self {
        Self(0)
    }
}

/// 语音配置
///
/// 一次请求内所有文本块共享的只读三元组（语音 + 语速 + 音调）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceProfile {
    voice: VoiceId,
    rate: RateOffset,
    pitch: PitchOffset,
}

impl VoiceProfile {
    pub fn new(voice: VoiceId, rate: RateOffset, pitch: PitchOffset) -> Self {
        Self { voice, rate, pitch }
    }

    pub fn voice(&self) -> &VoiceId {
        &self.voice
    }

    pub fn rate(&self) -> RateOffset {
        self.rate
    }

    pub fn pitch(&self) -> PitchOffset {
        self.pitch
    }

    /// 归一化为 API 滤镜参数对 (rate, pitch)
    pub fn filters(&self) -> (String, String) {
        (self.rate.encode(), self.pitch.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_encode_positive_has_plus_prefix() {
        assert_eq!(RateOffset::new(12).unwrap().encode(), "+12%");
        assert_eq!(RateOffset::new(100).unwrap().encode(), "+100%");
    }

    #[test]
    fn test_rate_encode_negative_keeps_sign() {
        assert_eq!(RateOffset::new(-30).unwrap().encode(), "-30%");
        assert_eq!(RateOffset::new(-100).unwrap().encode(), "-100%");
    }

    #[test]
    fn test_zero_offsets_encode_with_plus() {
        assert_eq!(RateOffset::default().encode(), "+0%");
        assert_eq!(PitchOffset::default().encode(), "+0Hz");
    }

    #[test]
    fn test_pitch_encode() {
        assert_eq!(PitchOffset::new(5).unwrap().encode(), "+5Hz");
        assert_eq!(PitchOffset::new(-20).unwrap().encode(), "-20Hz");
    }

    #[test]
    fn test_encode_round_trips_over_full_range() {
        for rate in RateOffset::MIN..=RateOffset::MAX {
            let encoded = RateOffset::new(rate).unwrap().encode();
            assert!(encoded.ends_with('%'));
            assert!(encoded.starts_with('+') || encoded.starts_with('-'));
            let numeric: i16 = encoded
                .trim_end_matches('%')
                .trim_start_matches('+')
                .parse()
                .unwrap();
            assert_eq!(numeric, rate);
        }
        for pitch in PitchOffset::MIN..=PitchOffset::MAX {
            let encoded = PitchOffset::new(pitch).unwrap().encode();
            assert!(encoded.ends_with("Hz"));
            let numeric: i16 = encoded
                .trim_end_matches("Hz")
                .trim_start_matches('+')
                .parse()
                .unwrap();
            assert_eq!(numeric, pitch);
        }
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(RateOffset::new(101), Err(VoiceError::RateOutOfRange(101)));
        assert_eq!(RateOffset::new(-101), Err(VoiceError::RateOutOfRange(-101)));
        assert_eq!(PitchOffset::new(21), Err(VoiceError::PitchOutOfRange(21)));
        assert_eq!(PitchOffset::new(-21), Err(VoiceError::PitchOutOfRange(-21)));
    }

    #[test]
    fn test_empty_voice_id_rejected() {
        assert_eq!(VoiceId::new("  "), Err(VoiceError::EmptyVoiceId));
        assert!(VoiceId::new("pt-BR-AntonioNeural").is_ok());
    }

    #[test]
    fn test_profile_filters() {
        let profile = VoiceProfile::new(
            VoiceId::new("pt-BR-FranciscaNeural").unwrap(),
            RateOffset::new(-15).unwrap(),
            PitchOffset::new(3).unwrap(),
        );
        assert_eq!(profile.filters(), ("-15%".to_string(), "+3Hz".to_string()));
    }
}
