//! # Help Command
//!
//! Fallback for a missing or unknown command.
//! Lists every command with the configured prefix.

use crate::domain::config::BotConfig;
use crate::domain::traits::ChatProvider;
use anyhow::Result;

pub async fn handle_help(bot: &BotConfig, chat: &impl ChatProvider) -> Result<()> {
    tracing::info!("Sending help message to {}", chat.room_id());
    let page = crate::strings::help::page(&bot.name, &bot.greeting, &bot.prefix);
    chat.send_page(&page)
        .await
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!(e))
}
