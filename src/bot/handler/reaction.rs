use serenity::all::{Context, Reaction, ReactionType};

use crate::{
    service::scoreboard::{reaction::page_for_emoji, ScoreboardService},
    state::AppState,
};

/// Handle a reaction added to a message
///
/// A page emoji added to a scoreboard message by a user switches the page shown. The
/// user's reaction is removed afterwards so the same page can be picked again later.
pub async fn handle_reaction_add(state: &AppState, ctx: Context, reaction: Reaction) {
    let message_id = reaction.message_id.get();
    if !state.registry.contains(message_id).await {
        return;
    }

    let Some(user_id) = reaction.user_id else {
        return;
    };
    if user_id == ctx.cache.current_user().id {
        return;
    }

    let page = match &reaction.emoji {
        ReactionType::Unicode(emoji) => page_for_emoji(emoji),
        _ => None,
    };

    if let Some(page) = page {
        let service = ScoreboardService::new(
            &state.db,
            ctx.http.clone(),
            &state.registry,
            state.rcon_timeout,
        );

        if let Err(e) = service.show_page(message_id, page).await {
            tracing::error!("Failed to switch scoreboard {} to page {}: {}", message_id, page, e);
        }
    }

    if let Err(e) = reaction.delete(&ctx).await {
        tracing::warn!(
            "Failed to remove reaction of {} from scoreboard {}: {}",
            user_id,
            message_id,
            e
        );
    }
}
