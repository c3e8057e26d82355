//! # Main Entry Point
//!
//! Starts the puzzle bot:
//! - Domain: Configuration, Types, Traits
//! - Infrastructure: Matrix, Puzzle Store
//! - Application: Query, Formatter, Packer, Router, Logging
//! - Interface: Command Handlers
//!

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use clap::Parser;
use matrix_sdk::{
    Client,
    config::SyncSettings,
    room::Room,
    ruma::events::room::{
        member::{MembershipState, StrippedRoomMemberEvent},
        message::{MessageType, SyncRoomMessageEvent},
    },
};
use std::sync::Arc;

use crate::application::router::CommandRouter;
use crate::domain::config::{AppConfig, DEFAULT_CONFIG_PATH};
use crate::domain::types::InboundMessage;
use crate::infrastructure::matrix::MatrixService;
use crate::strings::logs;

/// Chat bot answering puzzle tracker queries.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load Configuration
    let config = AppConfig::load(&cli.config)?;

    // 2. Logging Setup
    let _guard = application::logging::init(&config.logging)?;
    tracing::info!("{}", logs::config_loaded(&cli.config, &config.bot.hunt_id));

    // 3. Puzzle Store
    let store = infrastructure::store::from_config(&config.store)?;

    // 4. Matrix Setup
    let matrix = &config.services.matrix;
    let client = Client::builder()
        .homeserver_url(&matrix.homeserver)
        .build()
        .await
        .context("Failed to build Matrix client")?;

    client
        .matrix_auth()
        .login_username(&matrix.username, &matrix.password)
        .send()
        .await
        .context("Matrix login failed")?;

    let own_user_id = client
        .user_id()
        .context("Logged in without a user id")?
        .to_string();
    tracing::info!("{}", logs::logged_in(&own_user_id));

    if let Some(name) = &matrix.display_name {
        tracing::info!("{}", logs::setting_display_name(name));
        if let Err(e) = client.account().set_display_name(Some(name.as_str())).await {
            tracing::warn!("{}", logs::set_display_name_fail(&e.to_string()));
        }
    }

    let router = Arc::new(CommandRouter::new(
        config.bot.clone(),
        own_user_id,
        store,
    ));

    // 5. Event Handlers
    let start_time = std::time::SystemTime::now();

    client.add_event_handler(move |ev: SyncRoomMessageEvent, room: Room| {
        let router = router.clone();
        async move {
            let Some(original_msg) = ev.as_original() else {
                return;
            };

            // Ignore events older than start_time
            let event_time = std::time::UNIX_EPOCH
                + std::time::Duration::from_millis(ev.origin_server_ts().get().into());
            if event_time < start_time {
                return;
            }

            let MessageType::Text(text_content) = &original_msg.content.msgtype else {
                return;
            };

            let message = InboundMessage::new(
                original_msg.sender.as_str(),
                room.room_id().as_str(),
                text_content.body.as_str(),
            );
            let chat = MatrixService::new(room);

            // One task per message; pages within a response stay ordered.
            tokio::spawn(async move {
                if let Err(e) = router.route(&chat, &message).await {
                    tracing::error!("{}", logs::route_failed(&message.channel, &format!("{e:#}")));
                }
            });
        }
    });

    // Handle Invites
    client.add_event_handler(|ev: StrippedRoomMemberEvent, room: Room| async move {
        if ev.content.membership == MembershipState::Invite {
            tracing::info!("{}", logs::invite_received(room.room_id().as_str()));
            if let Err(e) = room.join().await {
                tracing::error!("{}", logs::join_invite_fail(&e.to_string()));
            }
        }
    });

    // 6. Sync Loop
    tracing::info!("{}", logs::SYNC_LOOP_START);
    if let Err(e) = client.sync(SyncSettings::default()).await {
        tracing::error!("{}", logs::sync_loop_fail(&e.to_string()));
        return Err(e).context("Matrix sync loop terminated");
    }

    Ok(())
}
