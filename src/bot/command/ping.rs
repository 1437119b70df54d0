use serenity::all::EditMessage;
use std::time::Instant;

use crate::error::AppError;

use super::CommandContext;

/// Replies with the round trip time of a REST call.
pub async fn run(command_ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let started = Instant::now();
    let mut reply = command_ctx
        .message
        .channel_id
        .say(&command_ctx.ctx.http, "Pong!")
        .await?;
    let latency = started.elapsed();

    reply
        .edit(
            command_ctx.ctx,
            EditMessage::new().content(pong_text(latency.as_secs_f64() * 1000.0)),
        )
        .await?;

    Ok(())
}

fn pong_text(millis: f64) -> String {
    format!("Pong! {:.1}ms", millis)
}
