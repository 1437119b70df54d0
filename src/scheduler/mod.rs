//! Cron jobs of the bot.

pub mod scoreboard_updates;
