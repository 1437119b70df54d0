//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # When to Use Fixtures
//!
//! - **Unit testing**: Test rendering and ranking without database overhead
//! - **Default values**: Provide consistent defaults for factory builders
//! - **RCON payloads**: Build the JSON bodies the RCON API would answer with
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let scoreboard = fixture::scoreboard::entity();
//!
//! // Create with custom fields
//! let other = fixture::scoreboard::entity_builder()
//!     .name("Server #2")
//!     .server_id(2)
//!     .build();
//!
//! // RCON log payload
//! let logs = fixture::rcon::envelope(vec![fixture::rcon::kill_log("A", "B")]);
//! ```

pub mod rcon;
pub mod scoreboard;

pub use scoreboard::{entity as scoreboard_entity, entity_builder as scoreboard_entity_builder};
