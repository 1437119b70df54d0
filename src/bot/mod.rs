//! Discord bot integration for the scoreboards.
//!
//! This module provides the gateway side of the application: prefix commands that
//! create and manage scoreboards, the creation wizard, and page reactions on scoreboard
//! messages. The bot's HTTP client is shared with the update scheduler so both edit
//! messages through the same connection.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild, channel and role data used for permission checks
//! - `GUILD_MESSAGES` - Command messages and wizard answers
//! - `GUILD_MESSAGE_REACTIONS` - Page reactions on scoreboard messages
//! - `MESSAGE_CONTENT` - Reading the command text (privileged intent)
//!
//! Note: `MESSAGE_CONTENT` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
pub mod validate;
pub mod wizard;
