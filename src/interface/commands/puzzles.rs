//! # Puzzle Listings
//!
//! Shared path for every listing command: query, format, pack, send.

use anyhow::Result;

use crate::application::formatter::LineFormatter;
use crate::application::packer;
use crate::application::query::PuzzleQuery;
use crate::domain::traits::ChatProvider;
use crate::domain::types::{PuzzleRecord, PuzzleStatus};
use crate::interface::commands::send_pages;

pub async fn handle_status_group(
    query: &PuzzleQuery,
    formatter: &LineFormatter,
    chat: &impl ChatProvider,
    statuses: &[PuzzleStatus],
    title: &str,
) -> Result<()> {
    let records = query.fetch_by_status_group(statuses).await?;
    send_puzzles(formatter, chat, &records, title).await
}

pub async fn send_puzzles(
    formatter: &LineFormatter,
    chat: &impl ChatProvider,
    records: &[PuzzleRecord],
    title: &str,
) -> Result<()> {
    let pages = packer::pack(title, formatter.format_all(records));
    tracing::info!(
        "Sending {} puzzle(s) as {} page(s) to {}: {}",
        records.len(),
        pages.len(),
        chat.room_id(),
        title
    );
    send_pages(chat, &pages).await
}
