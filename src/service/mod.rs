//! Business logic of the scoreboard bot.
//!
//! - `rcon` - RCON API client and match statistics retrieval
//! - `ranking` - Aggregation of kill logs into ranked player statistics
//! - `registry` - Shared in-memory state of live scoreboards
//! - `scoreboard` - Discord side of scoreboards: rendering, refreshing and lifecycle

pub mod ranking;
pub mod rcon;
pub mod registry;
pub mod scoreboard;
