pub use super::scoreboard::Entity as Scoreboard;
