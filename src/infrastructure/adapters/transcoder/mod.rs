//! Transcoder Adapter - 外部转码进程封装

mod ffmpeg_transcoder;

pub use ffmpeg_transcoder::{FfmpegTranscoder, FfmpegTranscoderConfig};
