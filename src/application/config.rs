use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{ExclusionFilter, ExtensionFilter, SearchConfig};

/// 步骤的原始输入
///
/// 配置文件中的键与输入名称相同（`file-extensions` 等）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ActionInputs {
    /// 逗号分隔的扩展名（不含点），或 `*`
    pub file_extensions: String,
    /// 搜索的根目录
    pub directory: String,
    /// 只有 `true` 才递归
    pub recursive: String,
    /// 逗号分隔的排除目录名或路径
    pub excluded_folders: String,
}

/// 命令行或环境变量提供的输入，优先于配置文件
#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    pub file_extensions: Option<String>,
    pub directory: Option<String>,
    pub recursive: Option<String>,
    pub excluded_folders: Option<String>,
}

impl ActionInputs {
    /// 从文件加载输入
    pub fn load_from_file(config_path: &Path) -> Result<Self> {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("无法读取配置文件: {}", config_path.display()))?;

        let inputs: ActionInputs = toml::from_str(&content)
            .with_context(|| format!("无法解析配置文件: {}", config_path.display()))?;

        Ok(inputs)
    }

    /// 用已提供的值覆盖
    pub fn apply(&mut self, overrides: InputOverrides) {
        if let Some(value) = overrides.file_extensions {
            self.file_extensions = value;
        }
        if let Some(value) = overrides.directory {
            self.directory = value;
        }
        if let Some(value) = overrides.recursive {
            self.recursive = value;
        }
        if let Some(value) = overrides.excluded_folders {
            self.excluded_folders = value;
        }
    }

    /// 转换为搜索配置，所有输入先去除首尾空白
    pub fn to_search_config(&self) -> SearchConfig {
        SearchConfig::new(
            self.directory.trim(),
            ExtensionFilter::parse(self.file_extensions.trim()),
            parse_recursive(&self.recursive),
            ExclusionFilter::new(parse_excluded_folders(&self.excluded_folders)),
        )
    }
}

/// 只有 `true` 开启递归，其他值都视为关闭
pub fn parse_recursive(input: &str) -> bool {
    input.trim() == "true"
}

/// 拆分逗号分隔的排除列表，丢弃空条目
pub fn parse_excluded_folders(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|folder| !folder.is_empty())
        .map(str::to_string)
        .collect()
}
