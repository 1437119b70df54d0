//! Aggregated match statistics shown on a scoreboard.

use chrono::{DateTime, Utc};

/// Time range whose kill logs are ranked.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchWindow {
    /// Display name of the map.
    pub map: String,
    pub start: DateTime<Utc>,
    /// Set when the window is a finished match.
    pub end: Option<DateTime<Utc>>,
}

/// Kill and death counts of one player.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerStats {
    pub name: String,
    pub kills: u32,
    pub deaths: u32,
}

impl PlayerStats {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kills: 0,
            deaths: 0,
        }
    }

    /// Ranking score: kills first, fewer deaths breaks ties.
    pub fn score(&self) -> i64 {
        self.kills as i64 * 1000 - self.deaths as i64
    }

    /// Kill/death ratio; zero when the player never died.
    pub fn kd_ratio(&self) -> f64 {
        if self.deaths == 0 {
            0.0
        } else {
            self.kills as f64 / self.deaths as f64
        }
    }
}

/// Result of the last successful fetch of a scoreboard.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchStats {
    pub window: MatchWindow,
    /// Players ordered by rank.
    pub players: Vec<PlayerStats>,
}
