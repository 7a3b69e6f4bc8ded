//! Export Context - Value Objects

use serde::{Deserialize, Serialize};

use crate::domain::project::ProjectName;

use super::BundleError;

/// 音频编码
///
/// 压缩编码由合成服务产出；未压缩编码只能由转码器从压缩产物派生。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioEncoding {
    /// 压缩（合成服务的原生输出）
    Mp3,
    /// 未压缩（由转码器派生）
    Wav,
}

impl AudioEncoding {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Wav => "wav",
        }
    }

    pub fn media_type(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mpeg",
            Self::Wav => "audio/wav",
        }
    }

    /// 压缩包和暂存目录中的分组目录名
    pub fn dir_name(&self) -> &'static str {
        self.extension()
    }
}

impl std::fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// 音频产物
///
/// 瞬态对象，只为交给 UI 或写入压缩包而存在。
#[derive(Debug, Clone)]
pub struct AudioArtifact {
    stem: String,
    encoding: AudioEncoding,
    data: Vec<u8>,
}

impl AudioArtifact {
    pub fn new(stem: impl Into<String>, encoding: AudioEncoding, data: Vec<u8>) -> Self {
        Self {
            stem: stem.into(),
            encoding,
            data,
        }
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn encoding(&self) -> AudioEncoding {
        self.encoding
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// 文件名: `{stem}.{ext}`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.stem, self.encoding.extension())
    }

    /// 压缩包内路径: `{project}/{mp3|wav}/{stem}.{ext}`
    pub fn archive_path(&self, project: &ProjectName) -> String {
        format!(
            "{}/{}/{}",
            project,
            self.encoding.dir_name(),
            self.file_name()
        )
    }
}

/// 导出包
///
/// 有序的产物集合，渲染为单个压缩包。
///
/// 不变量:
/// - 同一 (stem, encoding) 不重复
/// - 每个 wav 产物必须已有同名 mp3 兄弟（先 mp3 后 wav 插入）
#[derive(Debug, Default)]
pub struct ExportBundle {
    artifacts: Vec<AudioArtifact>,
}

impl ExportBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入一个产物，保持插入顺序
    pub fn push(&mut self, artifact: AudioArtifact) -> Result<(), BundleError> {
        if self.contains(artifact.stem(), artifact.encoding()) {
            return Err(BundleError::DuplicateArtifact {
                name: artifact.stem().to_string(),
                ext: artifact.encoding().extension(),
            });
        }
        if artifact.encoding() == AudioEncoding::Wav
            && !self.contains(artifact.stem(), AudioEncoding::Mp3)
        {
            return Err(BundleError::OrphanWav(artifact.stem().to_string()));
        }
        self.artifacts.push(artifact);
        Ok(())
    }

    fn contains(&self, stem: &str, encoding: AudioEncoding) -> bool {
        self.artifacts
            .iter()
            .any(|a| a.stem() == stem && a.encoding() == encoding)
    }

    pub fn artifacts(&self) -> &[AudioArtifact] {
        &self.artifacts
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// 指定编码的产物数量
    pub fn count(&self, encoding: AudioEncoding) -> usize {
        self.artifacts
            .iter()
            .filter(|a| a.encoding() == encoding)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mp3(stem: &str) -> AudioArtifact {
        AudioArtifact::new(stem, AudioEncoding::Mp3, vec![1, 2, 3])
    }

    fn wav(stem: &str) -> AudioArtifact {
        AudioArtifact::new(stem, AudioEncoding::Wav, vec![4, 5, 6])
    }

    #[test]
    fn test_archive_path_layout() {
        let project = ProjectName::new("demo").unwrap();
        assert_eq!(mp3("demo_voz_1").archive_path(&project), "demo/mp3/demo_voz_1.mp3");
        let b = wav("demo_voz_1");
        assert_eq!(b.archive_path(&project), "demo/wav/demo_voz_1.wav");
    }

    #[test]
    fn test_wav_requires_mp3_sibling() {
        let mut bundle = ExportBundle::new();
        assert_eq!(
            bundle.push(wav("demo_voz_1")),
            Err(BundleError::OrphanWav("demo_voz_1".to_string()))
        );
        bundle.push(mp3("demo_voz_1")).unwrap();
        bundle.push(wav("demo_voz_1")).unwrap();
        assert_eq!(bundle.len(), 2);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut bundle = ExportBundle::new();
        bundle.push(mp3("x")).unwrap();
        assert_eq!(
            bundle.push(mp3("x")),
            Err(BundleError::DuplicateArtifact {
                name: "x".to_string(),
                ext: "mp3",
            })
        );
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut bundle = ExportBundle::new();
        bundle.push(mp3("a_voz_1")).unwrap();
        bundle.push(wav("a_voz_1")).unwrap();
        bundle.push(mp3("a_voz_3")).unwrap();
        bundle.push(wav("a_voz_3")).unwrap();
        let stems: Vec<_> = bundle.artifacts().iter().map(|a| a.file_name()).collect();
        assert_eq!(
            stems,
            vec!["a_voz_1.mp3", "a_voz_1.wav", "a_voz_3.mp3", "a_voz_3.wav"]
        );
        assert_eq!(bundle.count(AudioEncoding::Mp3), 2);
        assert_eq!(bundle.count(AudioEncoding::Wav), 2);
    }
}
