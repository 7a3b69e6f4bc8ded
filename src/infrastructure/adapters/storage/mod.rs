//! Storage Adapter - 文件系统暂存实现

mod file_staging;

pub use file_staging::FileStaging;
