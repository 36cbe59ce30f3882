pub mod error;
pub mod paths;
pub mod filter;
pub mod search;
pub mod file_walker;

pub use error::SearchError;
pub use paths::{normalize_path, resolve_path};
pub use filter::{has_matching_extension, should_exclude, ExclusionFilter, ExtensionFilter};
pub use search::{MatchResult, SearchConfig};
pub use file_walker::Traverser;
