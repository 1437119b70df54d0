mod bot;
mod config;
mod data;
mod error;
mod model;
mod scheduler;
mod service;
mod startup;
mod state;
mod util;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config, error::AppError, scheduler::scoreboard_updates,
    service::registry::ScoreboardRegistry, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let registry = ScoreboardRegistry::new();
    let state = AppState::new(db.clone(), registry.clone(), &config);

    // Initialize Discord bot and extract HTTP client
    let (bot_client, discord_http) = bot::start::init_bot(&config, state).await?;

    scoreboard_updates::start_scheduler(
        &config.update_schedule,
        db,
        discord_http,
        registry,
        config.rcon_timeout,
    )
    .await?;

    bot::start::start_bot(bot_client).await
}
