use serenity::all::{Context, EventHandler, Message, Reaction, Ready};
use serenity::async_trait;

use crate::state::AppState;

pub mod message;
pub mod reaction;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub state: AppState,
}

impl Handler {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.state, ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(&self.state, ctx, message).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        reaction::handle_reaction_add(&self.state, ctx, reaction).await;
    }
}
