//! Aggregation of kill logs into a ranked player list.

use std::{cmp::Reverse, collections::HashMap};

use crate::model::{rcon::LogEntry, stats::PlayerStats};

/// Counts kills and deaths per player name.
///
/// Players appear in the order they are first mentioned. A `KILL` credits the killer
/// and every record, team kills included, charges the victim a death.
pub fn tally_logs(logs: &[LogEntry]) -> Vec<PlayerStats> {
    let mut players: Vec<PlayerStats> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for log in logs {
        if log.is_kill() {
            let killer = player_index(&mut players, &mut index, &log.player_name);
            players[killer].kills += 1;
        }

        let victim = player_index(&mut players, &mut index, &log.player2_name);
        players[victim].deaths += 1;
    }

    players
}

fn player_index(
    players: &mut Vec<PlayerStats>,
    index: &mut HashMap<String, usize>,
    name: &str,
) -> usize {
    if let Some(position) = index.get(name) {
        return *position;
    }

    players.push(PlayerStats::new(name));
    index.insert(name.to_string(), players.len() - 1);
    players.len() - 1
}

/// Orders players by score, highest first.
///
/// The sort is stable so equal scores keep their first-appearance order.
pub fn rank_players(mut players: Vec<PlayerStats>) -> Vec<PlayerStats> {
    players.sort_by_key(|player| Reverse(player.score()));
    players
}

/// Tallies and ranks a batch of kill logs.
pub fn aggregate_logs(logs: &[LogEntry]) -> Vec<PlayerStats> {
    rank_players(tally_logs(logs))
}
