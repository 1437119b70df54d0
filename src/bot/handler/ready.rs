//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. The gateway
//! fires it again after every reconnect.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Set the bot's activity
//! - Load the persisted scoreboards once and refresh them

use serenity::all::{ActivityData, Context, Ready};

use crate::{service::scoreboard::ScoreboardService, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// On the first ready the scoreboards are loaded from the database into the registry
/// and refreshed right away; later ready events only reset the activity. If loading
/// fails the next ready event tries again.
///
/// # Arguments
/// - `state` - Shared application state
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::playing(&state.status)));

    if !state.registry.mark_loaded() {
        return;
    }

    let service = ScoreboardService::new(
        &state.db,
        ctx.http.clone(),
        &state.registry,
        state.rcon_timeout,
    );

    if let Err(e) = service.load_all().await {
        tracing::error!("Failed to load scoreboards: {}", e);
        state.registry.unmark_loaded();
        return;
    }

    service.update_all().await;
}
