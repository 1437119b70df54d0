//! Database repository layer.
//!
//! Repositories use SeaORM entity models internally and return domain models so the
//! layers above never see stored string snowflakes.

pub mod scoreboard;

#[cfg(test)]
mod test;
