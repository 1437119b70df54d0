//! SeaORM entities for the scoreboard database.

pub mod prelude;

pub mod scoreboard;
