//! Project Context - Errors

use thiserror::Error;

/// Project 领域错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Project name cannot be empty")]
    EmptyProjectName,

    #[error("Project name too long: {0} chars (max 100)")]
    ProjectNameTooLong(usize),

    #[error("Block index {0} out of range [1, 10]")]
    BlockIndexOutOfRange(usize),

    #[error("Too many blocks: {0} (max 10)")]
    TooManyBlocks(usize),
}
