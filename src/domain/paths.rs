use std::path::{Component, Path, PathBuf};

use crate::domain::error::SearchError;

/// 规范化路径字符串，用于跨平台的排除规则比较
///
/// 反斜杠统一为正斜杠，去掉一个结尾斜杠，再转为小写。
pub fn normalize_path(path: &str) -> String {
    let unified = path.replace('\\', "/");
    let trimmed = unified.strip_suffix('/').unwrap_or(&unified);
    trimmed.to_lowercase()
}

/// 将路径解析为绝对路径
///
/// 相对路径基于当前工作目录；`.` 和 `..` 按字面折叠，不解析符号链接。
/// 空路径视为 `.`。
pub fn resolve_path(path: &Path) -> Result<PathBuf, SearchError> {
    let path = if path.as_os_str().is_empty() {
        Path::new(".")
    } else {
        path
    };

    let absolute = std::path::absolute(path).map_err(|source| SearchError::Resolve {
        path: path.to_path_buf(),
        source,
    })?;

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            other => resolved.push(other.as_os_str()),
        }
    }

    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_separators_and_case() {
        assert_eq!(normalize_path(r"C:\Users\Dev\Node_Modules"), "c:/users/dev/node_modules");
        assert_eq!(normalize_path("/a/B/"), "/a/b");
        assert_eq!(normalize_path("plain"), "plain");
    }

    #[test]
    fn test_normalize_strips_single_trailing_slash() {
        // 只去掉一个结尾斜杠
        assert_eq!(normalize_path("dist//"), "dist/");
        assert_eq!(normalize_path(r"dist\"), "dist");
    }

    #[test]
    fn test_resolve_relative_path() {
        let cwd = std::env::current_dir().unwrap();
        let resolved = resolve_path(Path::new("some/dir")).unwrap();

        assert!(resolved.is_absolute());
        assert_eq!(resolved, cwd.join("some").join("dir"));
    }

    #[test]
    fn test_resolve_collapses_dot_segments() {
        let resolved = resolve_path(Path::new("/data/./logs/../src")).unwrap();
        assert_eq!(resolved, PathBuf::from("/data/src"));
    }

    #[test]
    fn test_resolve_empty_is_current_dir() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(resolve_path(Path::new("")).unwrap(), resolve_path(&cwd).unwrap());
    }
}
