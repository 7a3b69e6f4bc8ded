//! Export Context - 导出限界上下文
//!
//! 职责:
//! - 音频编码（压缩 mp3 / 未压缩 wav）
//! - 音频产物（命名 + 字节）
//! - 导出包及其孤儿不变量（wav 必须有同名 mp3 兄弟）

mod errors;
mod value_objects;

pub use errors::BundleError;
pub use value_objects::{AudioArtifact, AudioEncoding, ExportBundle};
