//! # Strings Module
//!
//! Centralizes user-facing strings and log messages.
//! Ensures consistency in messaging and easier updates.

pub mod help;
pub mod logs;
pub mod messages;
