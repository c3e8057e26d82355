//! # Application Layer
//!
//! Contains the core logic of the bot: querying puzzles, formatting them,
//! packing them into pages and routing commands.

pub mod formatter;
pub mod logging;
pub mod packer;
pub mod query;
pub mod router;
