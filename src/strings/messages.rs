//! # Messages
//!
//! Page titles and usage hints shown in chat.

pub const UNSOLVED_TITLE: &str = "Unsolved puzzles";
pub const SOLVED_TITLE: &str = "Solved puzzles";
pub const STUCK_TITLE: &str = "Stuck puzzles";

pub const TAGS_FIELD: &str = "Puzzle Tags";
pub const NO_TAGS: &str = "*no tags*";

pub fn tagged_title(tags: &[String]) -> String {
    format!("Puzzles tagged with {}", tags.join(", "))
}

pub fn tagged_usage(prefix: &str) -> String {
    format!("`{prefix} tagged <tag> ...` (use `_` for space)")
}
