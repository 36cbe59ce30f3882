use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use ignore::WalkBuilder;
use indicatif::{ProgressBar, ProgressStyle};

use crate::domain::error::SearchError;
use crate::domain::paths::resolve_path;
use crate::domain::search::{MatchResult, SearchConfig};
use crate::infrastructure::{ErrorLogger, ErrorType, LoggerTrait};

/// 目录遍历器
///
/// 单线程深度优先遍历。子目录读取失败只记录警告，不会中断搜索；
/// 只有根目录的错误会作为 [`SearchError`] 返回。
pub struct Traverser {
    logger: Arc<dyn LoggerTrait>,
    error_logger: Arc<ErrorLogger>,
    show_progress: bool,
}

impl Traverser {
    pub fn new(logger: Arc<dyn LoggerTrait>, error_logger: Arc<ErrorLogger>) -> Self {
        Self {
            logger,
            error_logger,
            show_progress: false,
        }
    }

    /// 是否在stderr上显示进度
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// 解析配置中的根目录并执行搜索
    pub fn run(&self, config: &SearchConfig) -> Result<MatchResult, SearchError> {
        let root = resolve_path(config.root_directory())?;
        self.logger
            .info(&format!("🔍 开始在目录中搜索: {}", root.display()));
        self.search(&root, config)
    }

    /// 从 `directory` 开始搜索匹配的文件
    pub fn search(&self, directory: &Path, config: &SearchConfig) -> Result<MatchResult, SearchError> {
        let mut matched = MatchResult::new();

        check_root(directory)?;

        if config.exclusions().is_excluded(directory) {
            self.logger
                .info(&format!("跳过被排除的目录: {}", directory.display()));
            return Ok(matched);
        }

        fs::read_dir(directory).map_err(|source| SearchError::Unreadable {
            path: directory.to_path_buf(),
            source,
        })?;

        let progress = if self.show_progress {
            let progress = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::default_spinner()
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
            {
                progress.set_style(style);
            }
            progress
        } else {
            ProgressBar::hidden()
        };

        let mut walker = WalkBuilder::new(directory);
        walker
            .standard_filters(false)
            .hidden(false)
            .follow_links(false)
            .max_depth(if config.is_recursive() { None } else { Some(1) });

        // 只对目录应用排除规则，文件不按名称排除
        if config.is_recursive() && !config.exclusions().is_empty() {
            let exclusions = config.exclusions().clone();
            let logger = Arc::clone(&self.logger);
            walker.filter_entry(move |entry| {
                let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
                if is_dir && exclusions.is_excluded(entry.path()) {
                    let _ = logger.log_message(&format!("跳过被排除的目录: {}", entry.path().display()));
                    return false;
                }
                true
            });
        }

        let mut scanned: u64 = 0;
        for result in walker.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    self.report_walk_error(&err);
                    continue;
                }
            };

            // 符号链接和其他特殊文件既不遍历也不匹配
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            scanned += 1;
            if config.extensions().matches(&entry.file_name().to_string_lossy()) {
                let _ = self
                    .logger
                    .log_message(&format!("匹配文件: {}", entry.path().display()));
                matched.push(entry.into_path());
            }

            progress.set_message(format!("已扫描 {} 文件，匹配 {} 个", scanned, matched.count()));
            progress.tick();
        }

        progress.finish_and_clear();

        let _ = self.logger.log_message(&format!(
            "遍历完成: {} 扫描 {} 个文件，匹配 {} 个",
            directory.display(),
            scanned,
            matched.count()
        ));

        Ok(matched)
    }

    fn report_walk_error(&self, err: &ignore::Error) {
        let path = error_path(err);
        let error_type = ErrorType::from_io_kind(error_io_kind(err));

        self.logger.warning(&format!("⚠️读取目录时出错 {}", err));

        if let Err(log_err) = self
            .error_logger
            .log_error(error_type, path, "读取目录失败", Some(&err.to_string()))
        {
            let _ = self
                .logger
                .log_message(&format!("写入错误日志失败: {}", log_err));
        }
    }
}

/// 根目录必须存在并且是目录
fn check_root(directory: &Path) -> Result<(), SearchError> {
    let metadata = match fs::metadata(directory) {
        Ok(metadata) => metadata,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(SearchError::NotFound(directory.to_path_buf()));
        }
        Err(source) => {
            return Err(SearchError::Unreadable {
                path: directory.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_dir() {
        return Err(SearchError::NotADirectory(directory.to_path_buf()));
    }

    Ok(())
}

fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}

fn error_io_kind(err: &ignore::Error) -> Option<io::ErrorKind> {
    match err {
        ignore::Error::Io(io_err) => Some(io_err.kind()),
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => error_io_kind(err),
        _ => None,
    }
}
