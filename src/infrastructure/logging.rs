use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;

/// 日志记录器trait
pub trait LoggerTrait: Send + Sync {
    /// 是否启用了调试日志文件
    fn is_enabled(&self) -> bool;
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);
    /// 只写入调试日志文件
    fn log_message(&self, message: &str) -> Result<()>;
    fn finalize(&self, matched_files: usize, duration: Duration) -> Result<()>;
}

/// 转义工作流命令中的消息内容
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// 转义工作流命令中的属性值
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// 控制台与调试日志记录器
///
/// 控制台输出使用 CI 工作流命令格式，启用 `--log` 时同时写入调试日志文件。
pub struct Logger {
    log_file: Arc<Mutex<Option<File>>>,
    log_path: Option<PathBuf>,
    enabled: bool,
}

impl Logger {
    /// 只输出到控制台的日志记录器
    pub fn console() -> Self {
        Self {
            log_file: Arc::new(Mutex::new(None)),
            log_path: None,
            enabled: false,
        }
    }

    /// 创建新的日志记录器，`log_dir` 为调试日志文件所在目录
    pub fn new(log_dir: Option<&Path>) -> Result<Self> {
        let Some(log_dir) = log_dir else {
            return Ok(Self::console());
        };

        // 获取当前时间作为文件名的一部分
        let now = Local::now();
        let timestamp = now.format("%Y%m%d_%H%M%S");
        let log_path = log_dir.join(format!("debug_{}.log", timestamp));

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("无法创建调试日志文件: {}", log_path.display()))?;

        // 写入UTF-8 BOM以确保文件被正确识别为UTF-8
        let mut file_clone = file.try_clone()?;
        file_clone.write_all(&[0xEF, 0xBB, 0xBF])?;

        writeln!(file_clone, "# search-files 调试日志")?;
        writeln!(file_clone, "# 开始时间: {}", now.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(file_clone, "# --------------------------------------------")?;

        Ok(Self {
            log_file: Arc::new(Mutex::new(Some(file))),
            log_path: Some(log_path),
            enabled: true,
        })
    }

    /// 调试日志文件路径
    pub fn log_path(&self) -> Option<&Path> {
        self.log_path.as_deref()
    }

    fn mirror(&self, level: &str, message: &str) {
        if self.enabled {
            let _ = self.log_message(&format!("{} {}", level, message));
        }
    }
}

impl LoggerTrait for Logger {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn info(&self, message: &str) {
        println!("{}", message);
        self.mirror("[信息]", message);
    }

    fn warning(&self, message: &str) {
        println!("::warning::{}", escape_data(message));
        self.mirror("[警告]", message);
    }

    fn error(&self, message: &str) {
        println!("::error::{}", escape_data(message));
        self.mirror("[错误]", message);
    }

    fn log_message(&self, message: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");

        if let Ok(mut file_guard) = self.log_file.lock() {
            if let Some(ref mut file) = *file_guard {
                writeln!(file, "[{}] {}", timestamp, message)?;
                file.flush()?;
            }
        }

        Ok(())
    }

    fn finalize(&self, matched_files: usize, duration: Duration) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        if let Ok(mut file_guard) = self.log_file.lock() {
            if let Some(ref mut file) = *file_guard {
                writeln!(file, "# --------------------------------------------")?;
                writeln!(file, "# 搜索完成时间: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
                writeln!(file, "# 总用时: {:.3}秒", duration.as_secs_f64())?;
                writeln!(file, "# 匹配文件数: {}", matched_files)?;
                writeln!(file, "# ============================================")?;
                file.flush()?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_escape_workflow_command() {
        assert_eq!(escape_data("50%\nnext\r"), "50%25%0Anext%0D");
        assert_eq!(escape_property("a:b,c"), "a%3Ab%2Cc");
    }

    #[test]
    fn test_console_logger_is_disabled() {
        let logger = Logger::new(None).unwrap();
        assert!(!logger.is_enabled());
        assert!(logger.log_path().is_none());
        assert!(logger.log_message("ignored").is_ok());
    }

    #[test]
    fn test_file_logger_writes_messages() {
        let dir = tempdir().unwrap();
        let logger = Logger::new(Some(dir.path())).unwrap();
        assert!(logger.is_enabled());

        let logger_trait: &dyn LoggerTrait = &logger;
        logger_trait.warning("目录不可读");
        logger_trait.log_message("跳过被排除的目录: /x/target").unwrap();
        logger_trait.finalize(3, Duration::from_millis(1500)).unwrap();

        let content = fs::read_to_string(logger.log_path().unwrap()).unwrap();
        assert!(content.contains("[警告] 目录不可读"));
        assert!(content.contains("跳过被排除的目录: /x/target"));
        assert!(content.contains("# 匹配文件数: 3"));
    }
}
