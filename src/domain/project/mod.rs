//! Project Context - 项目限界上下文
//!
//! 职责:
//! - 项目名规范化（压缩包根目录名和产物文件名前缀）
//! - 有序文本块管理（空块在导出时被跳过，序号保留）

mod errors;
mod value_objects;

pub use errors::ProjectError;
pub use value_objects::{BlockIndex, ProjectName, TextBlock, MAX_BLOCKS};
