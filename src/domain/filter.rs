use std::collections::HashSet;
use std::path::Path;

use crate::domain::paths::normalize_path;

/// 通配符，匹配任意扩展名
pub const WILDCARD: &str = "*";

/// 扩展名过滤条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionFilter {
    /// 匹配所有文件（包括无扩展名的文件）
    Wildcard,
    /// 匹配集合中的扩展名（小写，不含点）
    Set(HashSet<String>),
}

impl ExtensionFilter {
    /// 从逗号分隔的扩展名列表创建过滤器
    ///
    /// 任意一项为 `*` 时即为通配。不做其他校验，空输入得到一个
    /// 只含空字符串的集合，它不会匹配任何文件。
    pub fn parse(input: &str) -> Self {
        Self::from_extensions(input.split(','))
    }

    /// 从扩展名列表创建过滤器
    pub fn from_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions: HashSet<String> = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().to_lowercase())
            .collect();

        if extensions.contains(WILDCARD) {
            Self::Wildcard
        } else {
            Self::Set(extensions)
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard)
    }

    /// 检查文件名是否符合扩展名要求
    pub fn matches(&self, file_name: &str) -> bool {
        has_matching_extension(file_name, self)
    }
}

/// 检查文件名的扩展名是否在过滤集合中（不区分大小写）
pub fn has_matching_extension(file_name: &str, filter: &ExtensionFilter) -> bool {
    let extensions = match filter {
        ExtensionFilter::Wildcard => return true,
        ExtensionFilter::Set(extensions) => extensions,
    };

    match Path::new(file_name).extension() {
        Some(ext) if !ext.is_empty() => extensions.contains(&ext.to_string_lossy().to_lowercase()),
        _ => false,
    }
}

/// 目录排除规则
///
/// 条目在创建时规范化。不含分隔符的条目按目录名匹配任意一级，
/// 其余条目按完整路径或路径前缀匹配。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionFilter {
    excluded: Vec<String>,
}

impl ExclusionFilter {
    /// 创建新的排除规则，空条目会被丢弃
    pub fn new<I, S>(excluded_folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            excluded: excluded_folders
                .into_iter()
                .map(|folder| normalize_path(folder.as_ref()))
                .filter(|folder| !folder.is_empty())
                .collect(),
        }
    }

    /// 规范化后的排除条目
    pub fn entries(&self) -> &[String] {
        &self.excluded
    }

    pub fn is_empty(&self) -> bool {
        self.excluded.is_empty()
    }

    /// 检查路径是否被排除
    pub fn is_excluded(&self, path: &Path) -> bool {
        if self.excluded.is_empty() {
            return false;
        }

        let candidate = normalize_path(&path.to_string_lossy());
        self.excluded
            .iter()
            .any(|excluded| matches_exclusion(&candidate, excluded))
    }
}

/// 检查路径是否命中任一排除条目
pub fn should_exclude(path: &str, excluded_folders: &[String]) -> bool {
    if excluded_folders.is_empty() {
        return false;
    }

    let candidate = normalize_path(path);
    excluded_folders
        .iter()
        .any(|excluded| matches_exclusion(&candidate, &normalize_path(excluded)))
}

/// 两个参数都必须已经规范化
fn matches_exclusion(candidate: &str, excluded: &str) -> bool {
    if excluded.is_empty() {
        return false;
    }

    // 精确匹配
    if candidate == excluded {
        return true;
    }

    // 子目录，必须在路径边界上
    if candidate
        .strip_prefix(excluded)
        .is_some_and(|rest| rest.starts_with('/'))
    {
        return true;
    }

    // 目录名匹配任意一级
    !excluded.contains('/') && candidate.split('/').any(|segment| segment == excluded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn excluded(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn test_extension_parsing() {
        let filter = ExtensionFilter::parse("js, TS ,md");
        assert_eq!(
            filter,
            ExtensionFilter::Set(["js", "ts", "md"].iter().map(|e| e.to_string()).collect())
        );

        assert!(ExtensionFilter::parse("*").is_wildcard());
        assert!(ExtensionFilter::parse("txt,*").is_wildcard());
    }

    #[test]
    fn test_extension_matching_is_case_insensitive() {
        let filter = ExtensionFilter::parse("txt,Rs");

        assert!(filter.matches("notes.TXT"));
        assert!(filter.matches("main.rs"));
        assert!(filter.matches("archive.tar.rs"));
        assert!(!filter.matches("main.rsx"));
        assert!(!filter.matches("txt"));
    }

    #[test]
    fn test_files_without_extension() {
        let filter = ExtensionFilter::parse("txt");
        assert!(!filter.matches("Makefile"));
        assert!(!filter.matches(".txt"));
        assert!(!filter.matches("trailing."));

        // 空列表不匹配任何有意义的文件
        let empty = ExtensionFilter::parse("");
        assert!(!empty.matches("Makefile"));
        assert!(!empty.matches("a.txt"));

        let wildcard = ExtensionFilter::parse("*");
        assert!(wildcard.matches("Makefile"));
        assert!(wildcard.matches(".bashrc"));
    }

    #[test]
    fn test_exclusion_by_folder_name() {
        let list = excluded(&["node_modules"]);

        assert!(should_exclude("/a/node_modules", &list));
        assert!(should_exclude("/a/node_modules/b", &list));
        assert!(!should_exclude("/a/node_modules_old", &list));
        assert!(!should_exclude("/a/my-node_modules", &list));
    }

    #[test]
    fn test_exclusion_no_partial_segment() {
        let list = excluded(&["lib"]);

        assert!(!should_exclude("/src/library", &list));
        assert!(!should_exclude("/src/mylib/x", &list));
        assert!(should_exclude("/src/lib/x", &list));
    }

    #[test]
    fn test_exclusion_by_full_path() {
        let list = excluded(&["/repo/build/"]);

        assert!(should_exclude("/repo/build", &list));
        assert!(should_exclude("/repo/build/out/app", &list));
        assert!(!should_exclude("/repo/builder", &list));
        // 含分隔符的条目不按目录名匹配
        assert!(!should_exclude("/other/repo/build", &list));
    }

    #[test]
    fn test_exclusion_ignores_case_and_separator_style() {
        let list = excluded(&[r"C:\Work\Vendor"]);

        assert!(should_exclude("c:/work/vendor/pkg", &list));
        assert!(should_exclude(r"C:\WORK\VENDOR", &list));

        let list = excluded(&["Target"]);
        assert!(should_exclude(r"D:\proj\target\debug", &list));
    }

    #[test]
    fn test_empty_exclusion_list() {
        assert!(!should_exclude("/anything", &[]));

        let filter = ExclusionFilter::new(["", "  "].iter().map(|s| s.trim()));
        assert!(filter.is_empty());
        assert!(!filter.is_excluded(&PathBuf::from("/anything")));
    }

    #[test]
    fn test_exclusion_filter_on_paths() {
        let filter = ExclusionFilter::new(["dist", "/srv/app/cache/"]);

        assert_eq!(filter.entries(), &["dist".to_string(), "/srv/app/cache".to_string()]);
        assert!(filter.is_excluded(&PathBuf::from("/srv/app/dist")));
        assert!(filter.is_excluded(&PathBuf::from("/srv/app/cache/tmp")));
        assert!(!filter.is_excluded(&PathBuf::from("/srv/app/src")));
    }
}
