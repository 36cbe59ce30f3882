use std::path::Path;
use std::time::{Duration, Instant};

use crate::domain::MatchResult;
use crate::infrastructure::LoggerTrait;

/// 格式化持续时间
pub fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}.{:03}s", secs, duration.subsec_millis())
    }
}

/// 输出一个匹配的文件
pub fn print_search_result(file: &Path, logger: &dyn LoggerTrait) {
    logger.info(&format!("📄 {}", file.display()));
}

/// 搜索摘要
pub struct SearchSummary {
    pub start_time: Instant,
}

impl SearchSummary {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 输出匹配总数和每个匹配文件
    pub fn print(&self, result: &MatchResult, logger: &dyn LoggerTrait) {
        logger.info(&format!(
            "✅ 共找到 {} 个符合条件的文件 (用时 {})",
            result.count(),
            format_duration(self.elapsed())
        ));

        for file in result.files() {
            print_search_result(file, logger);
        }
    }
}

impl Default for SearchSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MemoryLogger;
    use std::path::PathBuf;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_millis(2_345)), "2.345s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(3_725)), "1h 2m 5s");
    }

    #[test]
    fn test_summary_lists_every_file() {
        let mut result = MatchResult::new();
        result.push(PathBuf::from("/repo/a.txt"));
        result.push(PathBuf::from("/repo/sub/b.txt"));
        let logger = MemoryLogger::default();

        SearchSummary::new().print(&result, &logger);

        let infos = logger.infos();
        assert_eq!(infos.len(), 3);
        assert!(infos[0].starts_with("✅ 共找到 2 个"));
        assert_eq!(infos[1], "📄 /repo/a.txt");
        assert_eq!(infos[2], "📄 /repo/sub/b.txt");
    }
}
