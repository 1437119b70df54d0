//! Scoreboard service for Discord message management.
//!
//! This module provides the `ScoreboardService` which keeps the leaderboard messages in
//! sync with their RCON data sources. It coordinates the repository (persisted rows),
//! the registry (live display state), the RCON client and the Discord API.
//!
//! The service is organized into separate modules by concern:
//! - `embed` - Text and embed rendering
//! - `reaction` - Page emojis and reaction planning
//! - `update` - Refreshing messages and page changes
//! - `lifecycle` - Loading, registering, deleting and reconfiguring scoreboards

pub mod embed;
pub mod lifecycle;
pub mod reaction;
pub mod update;

use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage, EditMessage, Message, MessageId},
    http::Http,
};
use std::{sync::Arc, time::Duration};

use crate::{
    error::AppError, model::scoreboard::Scoreboard, service::registry::ScoreboardRegistry,
};

/// Service providing scoreboard operations.
///
/// Holds references to the database connection and the shared registry, the Discord
/// HTTP client, and the timeout applied to RCON requests.
pub struct ScoreboardService<'a> {
    /// Database connection for accessing scoreboard rows via the repository
    db: &'a DatabaseConnection,
    /// Discord HTTP client for sending, editing and reacting to messages
    http: Arc<Http>,
    /// Live scoreboards shared with the gateway handlers and the scheduler
    registry: &'a ScoreboardRegistry,
    /// Timeout of each RCON request
    rcon_timeout: Duration,
}

impl<'a> ScoreboardService<'a> {
    /// Creates a new ScoreboardService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    /// - `registry` - Shared registry of live scoreboards
    /// - `rcon_timeout` - Timeout applied to every RCON request
    ///
    /// # Returns
    /// - `ScoreboardService` - New service instance
    pub fn new(
        db: &'a DatabaseConnection,
        http: Arc<Http>,
        registry: &'a ScoreboardRegistry,
        rcon_timeout: Duration,
    ) -> Self {
        Self {
            db,
            http,
            registry,
            rcon_timeout,
        }
    }

    /// Posts the placeholder embed a new scoreboard message starts out with.
    async fn post_placeholder(&self, channel_id: u64) -> Result<Message, AppError> {
        let message = CreateMessage::new().embed(embed::placeholder_embed());
        let message = ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await?;

        tracing::debug!(
            "Posted scoreboard placeholder {} in channel {}",
            message.id,
            channel_id
        );

        Ok(message)
    }

    /// Replaces the embed of a scoreboard message.
    async fn edit_embed(
        &self,
        scoreboard: &Scoreboard,
        embed: CreateEmbed,
    ) -> Result<Message, AppError> {
        let edit = EditMessage::new().embed(embed);
        let message = self
            .http
            .edit_message(
                ChannelId::new(scoreboard.channel_id),
                MessageId::new(scoreboard.message_id),
                &edit,
                vec![],
            )
            .await?;

        Ok(message)
    }

    /// Deletes a scoreboard message, logging instead of failing.
    async fn delete_message_best_effort(&self, channel_id: u64, message_id: u64) {
        if let Err(e) = self
            .http
            .delete_message(ChannelId::new(channel_id), MessageId::new(message_id), None)
            .await
        {
            tracing::warn!(
                "Failed to delete scoreboard message {} in channel {}: {}",
                message_id,
                channel_id,
                e
            );
        }
    }
}
