//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod archive_writer;
mod audio_staging;
mod audio_transcoder;
mod speech_synthesizer;

pub use archive_writer::{ArchiveError, ArchiveWriterPort};
pub use audio_staging::{AudioStagingPort, StagingError};
pub use audio_transcoder::{AudioTranscoderPort, TranscodeError};
pub use speech_synthesizer::{
    SpeechSynthesizerPort, SynthesisError, SynthesisRequest, SynthesizedAudio,
};
