use serenity::all::{Context, Message};

use crate::{bot::command, state::AppState};

/// Handle message creation in a channel
///
/// Guild messages from users that start with the command prefix are dispatched as
/// commands; everything else is ignored.
pub async fn handle_message(state: &AppState, ctx: Context, message: Message) {
    // Commands are guild-only
    if message.guild_id.is_none() || message.author.bot {
        return;
    }

    let Some(invocation) = command::parse_invocation(&state.prefix, &message.content) else {
        return;
    };

    tracing::debug!(
        "Command {} from {} in channel {}",
        invocation.name,
        message.author.name,
        message.channel_id
    );

    command::dispatch(state, &ctx, &message, invocation).await;
}
