//! Lotevoz - 文本块批量语音合成与导出服务
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Project Context: 项目名与文本块
//! - Voice Context: 语音配置与滤镜编码
//! - Export Context: 音频产物与导出包
//!
//! 应用层 (application/):
//! - Ports: 端口定义（SpeechSynthesizer, AudioTranscoder, AudioStaging, ArchiveWriter）
//! - Commands: 预览 / 下载 / 批量导出处理器
//! - Queries: 语音目录查询
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（预览、下载、ZIP 导出）
//! - Adapters: HTTP TTS 客户端、ffmpeg 转码器、文件暂存、ZIP 写出

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
