use std::path::{Path, PathBuf};

use crate::domain::filter::{ExclusionFilter, ExtensionFilter};

/// 输出中分隔文件路径的字符
pub const OUTPUT_SEPARATOR: &str = ",";

/// 搜索配置
///
/// 在入口处创建一次，搜索过程中只读。
#[derive(Debug, Clone)]
pub struct SearchConfig {
    root_directory: PathBuf,
    extensions: ExtensionFilter,
    recursive: bool,
    exclusions: ExclusionFilter,
}

impl SearchConfig {
    pub fn new(
        root_directory: impl Into<PathBuf>,
        extensions: ExtensionFilter,
        recursive: bool,
        exclusions: ExclusionFilter,
    ) -> Self {
        Self {
            root_directory: root_directory.into(),
            extensions,
            recursive,
            exclusions,
        }
    }

    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    pub fn extensions(&self) -> &ExtensionFilter {
        &self.extensions
    }

    pub fn is_recursive(&self) -> bool {
        self.recursive
    }

    pub fn exclusions(&self) -> &ExclusionFilter {
        &self.exclusions
    }
}

/// 搜索结果，按遍历顺序保存匹配文件的绝对路径
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    files: Vec<PathBuf>,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, path: PathBuf) {
        self.files.push(path);
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// 以逗号连接所有路径，作为 `files` 输出
    pub fn to_output_string(&self) -> String {
        self.files
            .iter()
            .map(|path| path.to_string_lossy())
            .collect::<Vec<_>>()
            .join(OUTPUT_SEPARATOR)
    }
}
