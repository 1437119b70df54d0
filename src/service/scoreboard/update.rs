//! Scoreboard refresh operations.
//!
//! This module refreshes scoreboard messages with freshly fetched statistics, handles
//! page changes from the cached statistics, and keeps the page reactions in sync.

use chrono::Utc;
use serenity::all::{ChannelId, Message, MessageId, ReactionType};

use crate::{
    data::scoreboard::ScoreboardRepository,
    error::AppError,
    model::{scoreboard::Scoreboard, stats::MatchStats},
    service::rcon::fetch_match_stats,
};

use super::{embed, reaction, ScoreboardService};

impl<'a> ScoreboardService<'a> {
    /// Refreshes every live scoreboard one after another.
    ///
    /// A failing scoreboard is logged and the pass continues with the next one. If the
    /// previous pass is still running the call returns immediately.
    pub async fn update_all(&self) {
        let Some(_pass) = self.registry.try_begin_update() else {
            tracing::warn!("Previous scoreboard update pass still running, skipping this tick");
            return;
        };

        let message_ids = self.registry.message_ids().await;
        tracing::debug!("Updating {} scoreboards", message_ids.len());

        for message_id in message_ids {
            if let Err(e) = self.update(message_id).await {
                tracing::error!("Failed to update scoreboard {}: {}", message_id, e);
            }
        }
    }

    /// Refreshes one scoreboard.
    ///
    /// Reposts the message first if it was deleted, then fetches the current match,
    /// renders the displayed page and syncs the page reactions. On failure the error is
    /// shown on the message before it is returned. A scoreboard that was moved or
    /// deleted while the update ran is skipped.
    ///
    /// # Arguments
    /// - `message_id` - Message id the scoreboard is currently keyed by
    ///
    /// # Returns
    /// - `Ok(())` - Message shows the current match
    /// - `Err(AppError::NotFound)` - No live scoreboard uses `message_id`
    /// - `Err(AppError)` - Repost, fetch or edit failed
    pub async fn update(&self, message_id: u64) -> Result<(), AppError> {
        let live = self
            .registry
            .get(message_id)
            .await
            .ok_or_else(|| AppError::NotFound("Scoreboard not found".to_string()))?;

        let Some((scoreboard, message)) = self.ensure_message(live.scoreboard).await? else {
            return Ok(());
        };

        let result = match fetch_match_stats(&scoreboard, self.rcon_timeout).await {
            Ok(stats) => self.render(&scoreboard, stats, &message).await,
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            self.show_status(&scoreboard, &embed::update_failed_text(e)).await;
        }

        result
    }

    /// Switches the page a scoreboard displays.
    ///
    /// Re-renders from the statistics of the last fetch; nothing is fetched. Does
    /// nothing when the page is already displayed or no fetch has succeeded yet.
    ///
    /// # Arguments
    /// - `message_id` - Message the page reaction was added to
    /// - `page` - Requested page, starting at 1
    ///
    /// # Returns
    /// - `Ok(true)` - Message re-rendered
    /// - `Ok(false)` - Nothing to do
    /// - `Err(AppError)` - Editing the message failed
    pub async fn show_page(&self, message_id: u64, page: usize) -> Result<bool, AppError> {
        let Some(live) = self.registry.select_page(message_id, page).await else {
            return Ok(false);
        };
        let Some(stats) = live.stats.as_ref() else {
            return Ok(false);
        };

        let rendered = embed::scoreboard_embed(&live.scoreboard, stats, live.page, Utc::now());
        self.edit_embed(&live.scoreboard, rendered.embed).await?;

        tracing::debug!(
            "Scoreboard {} switched to page {}/{}",
            live.scoreboard.name,
            rendered.page,
            rendered.total_pages
        );

        Ok(true)
    }

    /// Fetches the scoreboard message, reposting it if it was deleted.
    ///
    /// A reposted message re-keys the row and the live entry to the new message id.
    ///
    /// # Returns
    /// - `Ok(Some((scoreboard, message)))` - Scoreboard as now persisted and its message
    /// - `Ok(None)` - The scoreboard was moved or deleted meanwhile
    /// - `Err(AppError)` - Fetching, posting or persisting failed
    async fn ensure_message(
        &self,
        scoreboard: Scoreboard,
    ) -> Result<Option<(Scoreboard, Message)>, AppError> {
        let error = match self
            .http
            .get_message(
                ChannelId::new(scoreboard.channel_id),
                MessageId::new(scoreboard.message_id),
            )
            .await
        {
            Ok(message) => return Ok(Some((scoreboard, message))),
            Err(e) => AppError::from(e),
        };

        if !error.is_discord_not_found() {
            return Err(error);
        }

        let Some(current) = self.reload_unmoved(&scoreboard).await? else {
            tracing::debug!(
                "Scoreboard {} was moved or deleted during its update",
                scoreboard.name
            );
            return Ok(None);
        };

        tracing::info!(
            "Message of scoreboard {} was deleted, posting a new one",
            current.name
        );

        let message = self.post_placeholder(current.channel_id).await?;
        let updated = ScoreboardRepository::new(self.db)
            .update_message_id(current.id, message.id.get())
            .await?;
        self.registry
            .replace(scoreboard.message_id, updated.clone())
            .await;

        Ok(Some((updated, message)))
    }

    /// Re-reads a scoreboard row unless it was re-keyed, moved or deleted.
    ///
    /// # Returns
    /// - `Ok(Some(Scoreboard))` - Row still keyed by the same message in the same channel
    /// - `Ok(None)` - Row gone or pointing at another message or channel
    /// - `Err(AppError::DbErr)` - Database error
    async fn reload_unmoved(
        &self,
        scoreboard: &Scoreboard,
    ) -> Result<Option<Scoreboard>, AppError> {
        let current = ScoreboardRepository::new(self.db)
            .get_by_message_id(scoreboard.message_id)
            .await?;

        Ok(current.filter(|row| row.channel_id == scoreboard.channel_id))
    }

    /// Caches the fetched statistics, renders the displayed page into the message and
    /// syncs its reactions.
    ///
    /// Reaction failures are logged; the leaderboard itself is already up to date.
    async fn render(
        &self,
        scoreboard: &Scoreboard,
        stats: MatchStats,
        message: &Message,
    ) -> Result<(), AppError> {
        let Some(page) = self
            .registry
            .store_stats(scoreboard.message_id, stats.clone())
            .await
        else {
            tracing::debug!(
                "Scoreboard {} was removed during its update",
                scoreboard.name
            );
            return Ok(());
        };

        let rendered = embed::scoreboard_embed(scoreboard, &stats, page, Utc::now());
        self.edit_embed(scoreboard, rendered.embed).await?;

        if let Err(e) = self.sync_reactions(message, rendered.total_pages).await {
            tracing::warn!(
                "Failed to sync page reactions of scoreboard {}: {}",
                scoreboard.name,
                e
            );
        }

        Ok(())
    }

    /// Adds the missing page emojis and removes those of pages that no longer exist.
    async fn sync_reactions(&self, message: &Message, total_pages: usize) -> Result<(), AppError> {
        let present: Vec<String> = message
            .reactions
            .iter()
            .filter(|reaction| reaction.me)
            .filter_map(|reaction| match &reaction.reaction_type {
                ReactionType::Unicode(emoji) => Some(emoji.clone()),
                _ => None,
            })
            .collect();

        let plan = reaction::plan_reactions(total_pages, &present);

        for emoji in plan.add {
            self.http
                .create_reaction(
                    message.channel_id,
                    message.id,
                    &ReactionType::Unicode(emoji.to_string()),
                )
                .await?;
        }

        for emoji in plan.remove {
            self.http
                .delete_message_reaction_emoji(
                    message.channel_id,
                    message.id,
                    &ReactionType::Unicode(emoji.to_string()),
                )
                .await?;
        }

        Ok(())
    }

    /// Shows a status message in place of the leaderboard, logging instead of failing.
    async fn show_status(&self, scoreboard: &Scoreboard, message: &str) {
        if let Err(e) = self
            .edit_embed(scoreboard, embed::status_embed(scoreboard, message))
            .await
        {
            tracing::warn!(
                "Failed to show status on scoreboard {}: {}",
                scoreboard.name,
                e
            );
        }
    }
}
