// 三层架构模块
pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

#[cfg(test)]
mod test_utils;

// 重新导出主要类型
pub use domain::{MatchResult, SearchConfig, SearchError, Traverser};
pub use application::{ActionInputs, InputOverrides};
pub use infrastructure::{ErrorLogger, ErrorType, Logger, LoggerTrait, OutputWriter};
pub use presentation::{print_search_result, SearchSummary};
