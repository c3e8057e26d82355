//! # Help Text
//!
//! Builds the help page listing every command.
//! Displayed when the command is missing or unknown.

use crate::domain::types::{CommandKind, Page};

pub const COMMANDS_FIELD: &str = "Commands";

/// `` `!puzzles unsolved`, `!puzzles solved`, ... `` in table order.
pub fn command_list(prefix: &str) -> String {
    CommandKind::TABLE
        .iter()
        .map(|(name, _)| format!("`{prefix} {name}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn page(bot_name: &str, greeting: &str, prefix: &str) -> Page {
    Page::new(bot_name)
        .with_description(greeting)
        .with_field(COMMANDS_FIELD, command_list(prefix))
}
