//! # Tagged Command
//!
//! `tagged` with no arguments lists the known tags; with arguments it lists
//! the puzzles carrying any of them (`_` stands for a space).

use anyhow::Result;

use crate::application::formatter::LineFormatter;
use crate::application::query::PuzzleQuery;
use crate::domain::traits::ChatProvider;
use crate::domain::types::Page;
use crate::interface::commands::puzzles::send_puzzles;
use crate::strings::messages;

pub fn tag_names(args: &[String]) -> Vec<String> {
    args.iter().map(|arg| arg.replace('_', " ")).collect()
}

pub async fn handle_tagged(
    query: &PuzzleQuery,
    formatter: &LineFormatter,
    prefix: &str,
    chat: &impl ChatProvider,
    args: &[String],
) -> Result<()> {
    if args.is_empty() {
        return send_tags(query, prefix, chat).await;
    }

    let tags = tag_names(args);
    let records = query.fetch_by_tags(&tags).await?;
    send_puzzles(formatter, chat, &records, &messages::tagged_title(&tags)).await
}

/// Usage hint plus every tag, as one unpaginated message.
pub async fn send_tags(query: &PuzzleQuery, prefix: &str, chat: &impl ChatProvider) -> Result<()> {
    let tags = query.list_all_tags().await?;
    let listing = if tags.is_empty() {
        messages::NO_TAGS.to_string()
    } else {
        tags.iter()
            .map(|t| t.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let page = Page::new("")
        .with_description(messages::tagged_usage(prefix))
        .with_field(messages::TAGS_FIELD, listing);
    chat.send_page(&page)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
