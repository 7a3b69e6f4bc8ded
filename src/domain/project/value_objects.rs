//! Project Context - Value Objects

use serde::{Deserialize, Serialize};

use super::ProjectError;

/// 一次请求最多允许的文本块数量
pub const MAX_BLOCKS: usize = 10;

/// 项目名
///
/// 规范化规则: 去首尾空白，内部空格替换为下划线。
/// 规范化后为空视为无效。项目名用作压缩包根目录名和产物文件名前缀。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ProjectError> {
        let sanitized = raw.as_ref().trim().replace(' ', "_");
        if sanitized.is_empty() {
            return Err(ProjectError::EmptyProjectName);
        }
        if sanitized.len() > 100 {
            return Err(ProjectError::ProjectNameTooLong(sanitized.len()));
        }
        Ok(Self(sanitized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProjectName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 块序号（1 起始）
///
/// 序号是块在界面上的原始位置，导出时空块被跳过但序号不压缩，
/// 下游按槽位命名依赖这一点。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockIndex(usize);

impl BlockIndex {
    pub fn new(index: usize) -> Result<Self, ProjectError> {
        if index == 0 || index > MAX_BLOCKS {
            return Err(ProjectError::BlockIndexOutOfRange(index));
        }
        Ok(Self(index))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for BlockIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 文本块
///
/// 用户输入的一个文本单元，对应恰好一对音频产物。
/// 文本允许为空——空块在导出中被静默跳过。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    index: BlockIndex,
    text: String,
}

impl TextBlock {
    pub fn new(index: BlockIndex, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }

    /// 按原始位置构造有序块列表（位置 0 → 序号 1）
    pub fn from_texts<I, S>(texts: I) -> Result<Vec<Self>, ProjectError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let texts: Vec<String> = texts.into_iter().map(Into::into).collect();
        if texts.len() > MAX_BLOCKS {
            return Err(ProjectError::TooManyBlocks(texts.len()));
        }
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Ok(Self::new(BlockIndex::new(i + 1)?, text)))
            .collect()
    }

    pub fn index(&self) -> BlockIndex {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// 是否为空块（仅空白也算空）
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// 产物文件名主干: `{project}_voz_{index}`
    pub fn artifact_stem(&self, project: &ProjectName) -> String {
        format!("{}_voz_{}", project, self.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_name_sanitizes_spaces() {
        let name = ProjectName::new("  meu projeto novo ").unwrap();
        assert_eq!(name.as_str(), "meu_projeto_novo");
    }

    #[test]
    fn test_project_name_rejects_blank() {
        assert_eq!(ProjectName::new("   "), Err(ProjectError::EmptyProjectName));
        assert_eq!(ProjectName::new(""), Err(ProjectError::EmptyProjectName));
    }

    #[test]
    fn test_block_index_bounds() {
        assert!(BlockIndex::new(1).is_ok());
        assert!(BlockIndex::new(MAX_BLOCKS).is_ok());
        assert_eq!(
            BlockIndex::new(0),
            Err(ProjectError::BlockIndexOutOfRange(0))
        );
        assert_eq!(
            BlockIndex::new(MAX_BLOCKS + 1),
            Err(ProjectError::BlockIndexOutOfRange(MAX_BLOCKS + 1))
        );
    }

    #[test]
    fn test_from_texts_assigns_one_based_indices() {
        let blocks = TextBlock::from_texts(["a", "", "c"]).unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].index().get(), 1);
        assert_eq!(blocks[2].index().get(), 3);
        assert!(blocks[1].is_blank());
    }

    #[test]
    fn test_from_texts_rejects_too_many() {
        let texts = vec!["x"; MAX_BLOCKS + 1];
        assert_eq!(
            TextBlock::from_texts(texts),
            Err(ProjectError::TooManyBlocks(MAX_BLOCKS + 1))
        );
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let block = TextBlock::new(BlockIndex::new(2).unwrap(), " \n\t ");
        assert!(block.is_blank());
    }

    #[test]
    fn test_artifact_stem() {
        let project = ProjectName::new("demo").unwrap();
        let block = TextBlock::new(BlockIndex::new(3).unwrap(), "World");
        assert_eq!(block.artifact_stem(&project), "demo_voz_3");
    }
}
