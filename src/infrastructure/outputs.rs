use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;

use crate::infrastructure::logging::{escape_data, escape_property};

/// 输出文件路径所在的环境变量
pub const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// 步骤输出写入器
///
/// 设置了输出文件时按文件命令格式追加写入，否则退回到
/// `::set-output` 控制台命令。
#[derive(Debug, Clone, Default)]
pub struct OutputWriter {
    output_file: Option<PathBuf>,
}

impl OutputWriter {
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self { output_file }
    }

    /// 从环境变量创建，空值视为未设置
    pub fn from_env() -> Self {
        let output_file = std::env::var_os(OUTPUT_FILE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::new(output_file)
    }

    /// 设置一个输出值
    pub fn set_output(&self, name: &str, value: &str) -> Result<()> {
        match &self.output_file {
            Some(path) => write_file_command(path, name, value),
            None => {
                println!();
                println!("::set-output name={}::{}", escape_property(name), escape_data(value));
                Ok(())
            }
        }
    }
}

fn write_file_command(path: &Path, name: &str, value: &str) -> Result<()> {
    let delimiter = format!("ghadelimiter_{}", Local::now().format("%Y%m%d%H%M%S%f"));

    if name.contains(&delimiter) {
        bail!("输出名称不能包含分隔符: {}", delimiter);
    }
    if value.contains(&delimiter) {
        bail!("输出值不能包含分隔符: {}", delimiter);
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("无法打开输出文件: {}", path.display()))?;

    write!(file, "{name}<<{delimiter}\n{value}\n{delimiter}\n")
        .with_context(|| format!("无法写入输出文件: {}", path.display()))?;

    Ok(())
}
