//! HTML parsers for Rotten Tomatoes
//!
//! Contains modules for parsing different page types.

pub mod search;
pub mod videos;

pub use search::parse_search_results;
pub use videos::parse_videos;
