//! Wire types of the community RCON HTTP API.

use serde::{Deserialize, Serialize};

use crate::error::rcon::RconError;

/// Envelope every RCON endpoint answers with.
#[derive(Debug, Deserialize)]
pub struct RconResponse<T> {
    pub result: Option<T>,
    pub error: Option<String>,
    #[serde(default)]
    pub failed: bool,
}

impl<T> RconResponse<T> {
    /// Fails with `RconError::Api` when the envelope carries a non-empty error.
    pub fn check_error(&self) -> Result<(), RconError> {
        match self.error.as_deref() {
            Some(error) if !error.is_empty() => Err(RconError::Api(error.to_string())),
            _ => Ok(()),
        }
    }

    /// Unwraps the result of a successful call.
    ///
    /// # Returns
    /// - `Ok(T)` - The `result` field
    /// - `Err(RconError::Api)` - The envelope carries an error
    /// - `Err(RconError::MissingResult)` - The envelope has no result
    pub fn into_result(self) -> Result<T, RconError> {
        self.check_error()?;

        self.result.ok_or(RconError::MissingResult)
    }
}

/// Body of `POST login`.
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

/// One entry of `get_map_history`, most recent first.
#[derive(Debug, Clone, Deserialize)]
pub struct MapHistoryEntry {
    pub name: String,
    /// Unix timestamp the match started at.
    pub start: f64,
    /// Unix timestamp the match ended at, absent while it is running.
    #[serde(default)]
    pub end: Option<f64>,
}

/// One record of `get_historical_logs`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogEntry {
    /// `KILL` or `TEAM KILL`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Killer.
    #[serde(default)]
    pub player_name: String,
    /// Victim.
    #[serde(default)]
    pub player2_name: String,
}

pub const KILL_LOG_TYPE: &str = "KILL";

impl LogEntry {
    pub fn is_kill(&self) -> bool {
        self.kind == KILL_LOG_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture::rcon;

    #[test]
    fn decodes_successful_envelope() {
        let body = rcon::envelope(vec![rcon::map_history_entry("foy_warfare", 1000, None)]);

        let response: RconResponse<Vec<MapHistoryEntry>> = serde_json::from_value(body).unwrap();
        let history = response.into_result().unwrap();

        assert_eq!(history.len(), 1);
        assert_eq!(history[0].name, "foy_warfare");
        assert!(history[0].end.is_none());
    }

    #[test]
    fn api_error_takes_precedence() {
        let body = rcon::error_envelope("Server not found");

        let response: RconResponse<Vec<LogEntry>> = serde_json::from_value(body).unwrap();

        assert!(matches!(
            response.into_result(),
            Err(RconError::Api(message)) if message == "Server not found"
        ));
    }

    #[test]
    fn failed_login_has_no_error_text() {
        let response: RconResponse<serde_json::Value> =
            serde_json::from_value(rcon::failed_login()).unwrap();

        assert!(response.check_error().is_ok());
        assert!(response.failed);
    }

    #[test]
    fn missing_result_is_reported() {
        let response: RconResponse<Vec<LogEntry>> =
            serde_json::from_value(serde_json::json!({ "error": null })).unwrap();

        assert!(matches!(
            response.into_result(),
            Err(RconError::MissingResult)
        ));
    }

    #[test]
    fn decodes_kill_and_team_kill_logs() {
        let body = rcon::envelope(vec![rcon::kill_log("A", "B"), rcon::team_kill_log("C", "D")]);

        let response: RconResponse<Vec<LogEntry>> = serde_json::from_value(body).unwrap();
        let logs = response.into_result().unwrap();

        assert!(logs[0].is_kill());
        assert_eq!(logs[0].player_name, "A");
        assert_eq!(logs[0].player2_name, "B");
        assert!(!logs[1].is_kill());
    }
}
