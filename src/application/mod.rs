//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechSynthesizer、AudioTranscoder、AudioStaging、ArchiveWriter）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Block commands
    DownloadBlock,
    PreviewBlock,
    // Project commands
    ExportProject,
    // Handlers
    handlers::{
        DownloadBlockHandler, DownloadBlockResponse, ExportProjectHandler, ExportProjectResponse,
        PreviewBlockHandler, PreviewBlockResponse,
    },
};

pub use error::ApplicationError;

pub use ports::{
    // Archive writer
    ArchiveError,
    ArchiveWriterPort,
    // Audio staging
    AudioStagingPort,
    StagingError,
    // Audio transcoder
    AudioTranscoderPort,
    TranscodeError,
    // Speech synthesizer
    SpeechSynthesizerPort,
    SynthesisError,
    SynthesisRequest,
    SynthesizedAudio,
};

pub use queries::{
    handlers::{ListVoicesHandler, ListVoicesResponse},
    ListVoices,
};
