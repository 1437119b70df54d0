//! Scoreboard lifecycle operations.
//!
//! This module loads the persisted scoreboards into the registry at startup and
//! handles the commands that create, remove and reconfigure scoreboards. Each operation
//! keeps the database row, the live registry entry and the Discord message consistent.

use crate::{
    data::scoreboard::ScoreboardRepository,
    error::AppError,
    model::scoreboard::{
        CreateScoreboardParam, Scoreboard, ScoreboardChange, ScoreboardSettings,
        UpdateScoreboardParam,
    },
};

use super::ScoreboardService;

impl<'a> ScoreboardService<'a> {
    /// Loads every persisted scoreboard into the registry.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of scoreboards loaded
    /// - `Err(AppError::DbErr)` - Database error
    /// - `Err(AppError::InternalErr)` - A stored snowflake failed to parse
    pub async fn load_all(&self) -> Result<usize, AppError> {
        let scoreboards = ScoreboardRepository::new(self.db).get_all().await?;
        let count = scoreboards.len();

        for scoreboard in scoreboards {
            self.registry.insert(scoreboard).await;
        }

        tracing::info!("Loaded {} scoreboards", count);

        Ok(count)
    }

    /// Creates a scoreboard in a channel.
    ///
    /// Posts the placeholder message, inserts the row keyed by the new message and adds
    /// the live entry. The first refresh is left to the caller.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the scoreboard belongs to
    /// - `channel_id` - Channel to post the scoreboard in
    /// - `settings` - Validated wizard answers
    ///
    /// # Returns
    /// - `Ok(Scoreboard)` - The registered scoreboard
    /// - `Err(AppError::DiscordErr)` - Posting the placeholder failed
    /// - `Err(AppError::DbErr)` - Inserting the row failed
    pub async fn register(
        &self,
        guild_id: u64,
        channel_id: u64,
        settings: ScoreboardSettings,
    ) -> Result<Scoreboard, AppError> {
        let message = self.post_placeholder(channel_id).await?;
        let param = CreateScoreboardParam::new(settings, guild_id, channel_id, message.id.get());

        let scoreboard = match ScoreboardRepository::new(self.db).create(param).await {
            Ok(scoreboard) => scoreboard,
            Err(e) => {
                self.delete_message_best_effort(channel_id, message.id.get()).await;
                return Err(e);
            }
        };

        self.registry.insert(scoreboard.clone()).await;

        tracing::info!(
            "Registered scoreboard {} in channel {} of guild {}",
            scoreboard.name,
            channel_id,
            guild_id
        );

        Ok(scoreboard)
    }

    /// Deletes a scoreboard of a guild.
    ///
    /// Removes the row and the live entry and deletes the message. A message that can
    /// no longer be deleted is only logged.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the command was used in
    /// - `message_id` - Message id of the scoreboard
    ///
    /// # Returns
    /// - `Ok(Scoreboard)` - The deleted scoreboard
    /// - `Err(AppError::NotFound)` - No scoreboard of this guild uses `message_id`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn delete(&self, guild_id: u64, message_id: u64) -> Result<Scoreboard, AppError> {
        let scoreboard = self.find_in_guild(guild_id, message_id).await?;

        ScoreboardRepository::new(self.db)
            .delete_by_message_id(message_id)
            .await?;
        self.registry.remove(message_id).await;
        self.delete_message_best_effort(scoreboard.channel_id, scoreboard.message_id)
            .await;

        tracing::info!(
            "Deleted scoreboard {} from guild {}",
            scoreboard.name,
            guild_id
        );

        Ok(scoreboard)
    }

    /// Changes one option of a scoreboard and refreshes it.
    ///
    /// Moving a scoreboard to another channel posts a new placeholder there, re-keys
    /// the row to the new message and deletes the old message.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the command was used in
    /// - `message_id` - Message id of the scoreboard
    /// - `change` - Validated new value
    ///
    /// # Returns
    /// - `Ok(Scoreboard)` - The updated scoreboard
    /// - `Err(AppError::NotFound)` - No scoreboard of this guild uses `message_id`
    /// - `Err(AppError::DiscordErr)` - Posting in the new channel failed
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_option(
        &self,
        guild_id: u64,
        message_id: u64,
        change: ScoreboardChange,
    ) -> Result<Scoreboard, AppError> {
        let scoreboard = self.find_in_guild(guild_id, message_id).await?;

        let moved_to = match change {
            ScoreboardChange::Channel(channel_id) if channel_id != scoreboard.channel_id => {
                Some(channel_id)
            }
            _ => None,
        };
        let option = change.option();

        let mut param = UpdateScoreboardParam::from_scoreboard(&scoreboard);
        change.apply(&mut param);

        if let Some(channel_id) = moved_to {
            param.message_id = self.post_placeholder(channel_id).await?.id.get();
        }

        let new_message_id = param.message_id;
        let updated = match ScoreboardRepository::new(self.db).update(param).await {
            Ok(updated) => updated,
            Err(e) => {
                if let Some(channel_id) = moved_to {
                    self.delete_message_best_effort(channel_id, new_message_id).await;
                }
                return Err(e);
            }
        };

        if moved_to.is_some() {
            self.delete_message_best_effort(scoreboard.channel_id, scoreboard.message_id)
                .await;
        }

        if !self
            .registry
            .replace(scoreboard.message_id, updated.clone())
            .await
        {
            self.registry.insert(updated.clone()).await;
        }

        tracing::info!(
            "Changed {} of scoreboard {} in guild {}",
            option.as_str(),
            updated.name,
            guild_id
        );

        if let Err(e) = self.update(updated.message_id).await {
            tracing::warn!(
                "Failed to refresh scoreboard {} after changing {}: {}",
                updated.name,
                option.as_str(),
                e
            );
        }

        Ok(updated)
    }

    /// Looks up a scoreboard by message id, restricted to one guild.
    async fn find_in_guild(&self, guild_id: u64, message_id: u64) -> Result<Scoreboard, AppError> {
        ScoreboardRepository::new(self.db)
            .get_by_message_id(message_id)
            .await?
            .filter(|scoreboard| scoreboard.guild_id == guild_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "This guild has no scoreboard with message ID {}",
                    message_id
                ))
            })
    }
}
