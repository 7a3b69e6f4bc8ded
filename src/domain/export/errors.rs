//! Export Context - Errors

use thiserror::Error;

/// 导出包不变量错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BundleError {
    #[error("Orphan wav artifact '{0}': no mp3 sibling with the same stem")]
    OrphanWav(String),

    #[error("Duplicate artifact '{name}.{ext}'")]
    DuplicateArtifact { name: String, ext: &'static str },
}
