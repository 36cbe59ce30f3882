pub mod display;

pub use display::{format_duration, print_search_result, SearchSummary};
