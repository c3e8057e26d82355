//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! Each message is handled on its own: drop the bot's own messages, drop anything
//! without the prefix, then parse `<prefix> <command> [args...]` and dispatch.

use anyhow::Result;
use std::sync::Arc;

use crate::application::formatter::LineFormatter;
use crate::application::query::{self, PuzzleQuery};
use crate::domain::config::BotConfig;
use crate::domain::traits::{ChatProvider, PuzzleStore};
use crate::domain::types::{Command, CommandKind, InboundMessage};
use crate::interface::commands;
use crate::strings::messages;

/// What the router did with a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    IgnoredOwnMessage,
    IgnoredNoPrefix,
    Handled(CommandKind),
}

pub struct CommandRouter {
    bot: BotConfig,
    bot_user_id: String,
    query: PuzzleQuery,
    formatter: LineFormatter,
}

impl CommandRouter {
    pub fn new(bot: BotConfig, bot_user_id: impl Into<String>, store: Arc<dyn PuzzleStore>) -> Self {
        let query = PuzzleQuery::new(store, bot.hunt_id.clone());
        let formatter = LineFormatter::new(bot.sheet_url_template.clone());
        Self {
            bot,
            bot_user_id: bot_user_id.into(),
            query,
            formatter,
        }
    }

    /// Handle one inbound message. Datastore and send failures are returned
    /// to the caller; nothing is retried.
    pub async fn route<C>(&self, chat: &C, message: &InboundMessage) -> Result<Outcome>
    where
        C: ChatProvider,
    {
        if message.sender == self.bot_user_id {
            return Ok(Outcome::IgnoredOwnMessage);
        }
        if !message.body.starts_with(&self.bot.prefix) {
            return Ok(Outcome::IgnoredNoPrefix);
        }

        tracing::info!(
            "{}",
            crate::strings::logs::inbound(&message.channel, &message.sender, &message.body)
        );

        let command = Command::parse(&message.body);
        let kind = command.kind();
        tracing::info!(
            "Router dispatching cmd={:?} args={:?} sender='{}'",
            kind,
            command.args,
            message.sender
        );

        match kind {
            CommandKind::Unsolved => {
                commands::puzzles::handle_status_group(
                    &self.query,
                    &self.formatter,
                    chat,
                    query::UNSOLVED,
                    messages::UNSOLVED_TITLE,
                )
                .await?
            }
            CommandKind::Solved => {
                commands::puzzles::handle_status_group(
                    &self.query,
                    &self.formatter,
                    chat,
                    query::SOLVED,
                    messages::SOLVED_TITLE,
                )
                .await?
            }
            CommandKind::Stuck => {
                commands::puzzles::handle_status_group(
                    &self.query,
                    &self.formatter,
                    chat,
                    query::STUCK,
                    messages::STUCK_TITLE,
                )
                .await?
            }
            CommandKind::Tagged => {
                commands::tagged::handle_tagged(
                    &self.query,
                    &self.formatter,
                    &self.bot.prefix,
                    chat,
                    &command.args,
                )
                .await?
            }
            CommandKind::Help => commands::help::handle_help(&self.bot, chat).await?,
        }

        Ok(Outcome::Handled(kind))
    }
}
