//! 应用层 - 命令（写操作）
//!
//! CQRS 命令侧：预览、下载、批量导出

mod block_commands;
mod project_commands;

pub mod handlers;

pub use block_commands::*;
pub use project_commands::*;
