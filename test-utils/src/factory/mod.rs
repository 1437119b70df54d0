//! Factory methods for creating test data.
//!
//! Factories insert rows into the test database with sensible defaults taken from the
//! fixtures, giving every row a unique message id so several can coexist.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let scoreboard = factory::create_scoreboard(&db).await?;
//!
//! let other = factory::scoreboard::ScoreboardFactory::new(&db)
//!     .guild_id("123")
//!     .name("Night Server")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `scoreboard` - Create scoreboard entities
//! - `helpers` - Unique id generation shared by factories

pub mod helpers;
pub mod scoreboard;

pub use scoreboard::create_scoreboard;
