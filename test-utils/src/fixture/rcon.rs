//! RCON API payload fixtures.
//!
//! Builds the JSON bodies returned by the community RCON tool so response decoding
//! and aggregation can be tested without a live server.

use serde_json::{json, Value};

/// Wraps a result in the `{result, error, failed}` envelope of a successful call.
pub fn envelope(result: impl Into<Value>) -> Value {
    json!({
        "result": result.into(),
        "error": null,
        "failed": false,
    })
}

/// Envelope of a call that the API rejected with an error message.
pub fn error_envelope(error: &str) -> Value {
    json!({
        "result": null,
        "error": error,
        "failed": true,
    })
}

/// Envelope returned by `login` when the credentials are wrong.
pub fn failed_login() -> Value {
    json!({
        "result": null,
        "error": "",
        "failed": true,
    })
}

/// Log record of `killer` killing `victim`.
pub fn kill_log(killer: &str, victim: &str) -> Value {
    log("KILL", killer, victim)
}

/// Log record of `killer` team killing `victim`.
pub fn team_kill_log(killer: &str, victim: &str) -> Value {
    log("TEAM KILL", killer, victim)
}

fn log(kind: &str, killer: &str, victim: &str) -> Value {
    json!({
        "type": kind,
        "player_name": killer,
        "player2_name": victim,
        "weapon": "M1 GARAND",
        "server": "1",
    })
}

/// Map history entry as returned by `get_map_history`.
///
/// # Arguments
/// - `name` - Raw map name, e.g. `foy_warfare`
/// - `start` - Unix timestamp the match started at
/// - `end` - Unix timestamp the match ended at, `None` while running
pub fn map_history_entry(name: &str, start: i64, end: Option<i64>) -> Value {
    json!({
        "name": name,
        "start": start,
        "end": end,
    })
}
