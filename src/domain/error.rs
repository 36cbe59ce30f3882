use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// 搜索的致命错误（只针对根目录）
#[derive(Error, Debug)]
pub enum SearchError {
    #[error("无法解析目录 {}: {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("目录不存在: {}", .0.display())]
    NotFound(PathBuf),

    #[error("不是目录: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("无法读取目录 {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
