//! Domain models and parameter types.
//!
//! Entity models from the `entity` crate are converted into these types at the repository
//! boundary so Discord snowflakes are typed as `u64` everywhere above the data layer.

pub mod map;
pub mod rcon;
pub mod scoreboard;
pub mod stats;
