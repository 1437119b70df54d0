//! Application state shared across all gateway event handlers.
//!
//! This module defines the `AppState` struct which holds the shared resources the bot
//! needs while handling events. The state is initialized once during startup and moved
//! into the event handler; the scheduler holds clones of the same resources.

use sea_orm::DatabaseConnection;
use std::time::Duration;

use crate::{config::Config, service::registry::ScoreboardRegistry};

/// Application state containing shared resources and dependencies.
///
/// All fields use cheap-to-clone types:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `ScoreboardRegistry` uses `Arc` for shared state
/// - `String` and `Duration` are cloned when needed
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Live scoreboards shared with the update scheduler.
    pub registry: ScoreboardRegistry,

    /// Prefix every command message starts with.
    pub prefix: String,

    /// Timeout applied to every RCON request.
    pub rcon_timeout: Duration,

    /// Text of the "playing" activity set on ready.
    pub status: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `registry` - Registry of live scoreboards
    /// - `config` - Application configuration providing prefix, timeout and status
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, registry: ScoreboardRegistry, config: &Config) -> Self {
        Self {
            db,
            registry,
            prefix: config.command_prefix.clone(),
            rcon_timeout: config.rcon_timeout,
            status: config.bot_status.clone(),
        }
    }
}
