//! Voice Context - Errors

use thiserror::Error;

/// Voice 领域错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VoiceError {
    #[error("Voice id cannot be empty")]
    EmptyVoiceId,

    #[error("Rate offset {0} out of range [-100, 100]")]
    RateOutOfRange(i16),

    #[error("Pitch offset {0} out of range [-20, 20]")]
    PitchOutOfRange(i16),
}
