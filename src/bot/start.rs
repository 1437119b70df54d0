use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::bot::handler::Handler;
use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;

/// Builds the Discord bot client without connecting it
///
/// The returned HTTP client can be used to send and edit messages before and while the
/// gateway connection runs, e.g. by the update scheduler.
///
/// # Arguments
/// - `config` - Application configuration providing the bot token
/// - `state` - Shared state handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Bot client and its HTTP client
/// - `Err(AppError::DiscordErr)` - Building the client failed
pub async fn init_bot(
    config: &Config,
    state: AppState,
) -> Result<(Client, Arc<Http>), AppError> {
    // MESSAGE_CONTENT is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;

    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the bot to the gateway
///
/// Blocks until the connection shuts down, so it should be run inside a tokio task
/// or as the last step of `main`.
///
/// # Arguments
/// - `client` - Client built by `init_bot`
///
/// # Returns
/// - `Ok(())` if the bot shut down cleanly
/// - `Err(AppError)` if the gateway connection fails
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
