//! Scoreboard Test Utils
//!
//! Provides shared testing utilities for the scoreboard bot. This crate offers a builder
//! pattern for creating test contexts with in-memory SQLite databases, factories that
//! insert scoreboard rows, and fixtures that produce RCON API payloads.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Row factories that insert into the test database
//! - **fixture**: In-memory entity models and RCON JSON payloads
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Scoreboard;
//!
//! #[tokio::test]
//! async fn test_scoreboard_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Scoreboard)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
