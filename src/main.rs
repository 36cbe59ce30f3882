use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use search_files::application::{ActionInputs, InputOverrides};
use search_files::infrastructure::{ErrorLogger, Logger, LoggerTrait, OutputWriter};
use search_files::presentation::SearchSummary;
use search_files::Traverser;

/// 按扩展名查找目录中的文件，作为流水线步骤运行
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// 逗号分隔的扩展名列表（不含点），或 `*` 匹配所有文件
    #[clap(long, env = "INPUT_FILE-EXTENSIONS")]
    file_extensions: Option<String>,

    /// 要搜索的目录路径
    #[clap(long, env = "INPUT_DIRECTORY")]
    directory: Option<String>,

    /// 为 `true` 时搜索子目录
    #[clap(long, env = "INPUT_RECURSIVE")]
    recursive: Option<String>,

    /// 逗号分隔的排除目录名或路径
    #[clap(long, env = "INPUT_EXCLUDED-FOLDERS")]
    excluded_folders: Option<String>,

    /// 从 TOML 文件读取输入，命令行和环境变量优先
    #[clap(long)]
    config: Option<PathBuf>,

    /// 启用详细日志记录，日志文件保存到当前目录
    #[clap(long)]
    log: bool,

    /// 不显示进度
    #[clap(long)]
    no_progress: bool,
}

impl Args {
    fn overrides(&self) -> InputOverrides {
        InputOverrides {
            file_extensions: self.file_extensions.clone(),
            directory: self.directory.clone(),
            recursive: self.recursive.clone(),
            excluded_folders: self.excluded_folders.clone(),
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            Logger::console().error(&format!("执行失败: {:#}", err));
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let log_dir = args.log.then(|| PathBuf::from("."));

    // 初始化日志记录器
    let logger: Arc<dyn LoggerTrait> = Arc::new(Logger::new(log_dir.as_deref())?);
    let error_logger = Arc::new(ErrorLogger::new(log_dir.as_deref())?);

    let mut inputs = match &args.config {
        Some(path) => ActionInputs::load_from_file(path)?,
        None => ActionInputs::default(),
    };
    inputs.apply(args.overrides());

    // 记录搜索参数到日志
    if logger.is_enabled() {
        logger.log_message(&format!("扩展名: {}", inputs.file_extensions))?;
        logger.log_message(&format!("目标目录: {}", inputs.directory))?;
        logger.log_message(&format!("递归: {}", inputs.recursive))?;
        logger.log_message(&format!("排除目录: {}", inputs.excluded_folders))?;
    }

    let config = inputs.to_search_config();
    let summary = SearchSummary::new();

    let traverser = Traverser::new(Arc::clone(&logger), Arc::clone(&error_logger))
        .with_progress(!args.no_progress);
    let result = traverser.run(&config).context("搜索失败")?;

    let outputs = OutputWriter::from_env();
    outputs.set_output("files", &result.to_output_string())?;
    outputs.set_output("match-count", &result.count().to_string())?;

    summary.print(&result, logger.as_ref());
    error_logger.print_error_summary();

    // 完成日志记录
    logger.finalize(result.count(), summary.elapsed())?;
    error_logger.finalize()?;

    Ok(())
}
