//! Client for the community RCON HTTP API.
//!
//! Every fetch uses its own `RconClient` so the login cookie of one scoreboard never
//! leaks into the requests of another. Requests run strictly one after the other.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;

use crate::{
    error::{internal::InternalError, rcon::RconError, AppError},
    model::{
        map::pretty_map_name,
        rcon::{LogEntry, LoginRequest, MapHistoryEntry, RconResponse, KILL_LOG_TYPE},
        scoreboard::Scoreboard,
        stats::{MatchStats, MatchWindow},
    },
    service::ranking::aggregate_logs,
};

const LOGIN_ENDPOINT: &str = "login";
const MAP_HISTORY_ENDPOINT: &str = "get_map_history";
const LOGS_ENDPOINT: &str = "get_historical_logs";
const PUBLIC_INFO_ENDPOINT: &str = "public_info";

/// Matches younger than this are likely a fresh restart; the previous match is shown.
const RECENT_MATCH_SECS: i64 = 300;
const LOG_LIMIT: u32 = 999_999;
const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Session against one RCON API with its own cookie store.
pub struct RconClient {
    http: reqwest::Client,
    api_url: String,
    timeout: Duration,
}

impl RconClient {
    /// Creates a client for the API at `api_url`.
    ///
    /// # Arguments
    /// - `api_url` - Base URL ending with `/`
    /// - `timeout` - Timeout applied to every request
    ///
    /// # Returns
    /// - `Ok(RconClient)` - Client with an empty cookie store
    /// - `Err(RconError::Request)` - The HTTP client could not be built
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self, RconError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .timeout(timeout)
            .build()
            .map_err(RconError::Request)?;

        Ok(Self {
            http,
            api_url: api_url.to_string(),
            timeout,
        })
    }

    fn endpoint(&self, endpoint: &str) -> String {
        format!("{}{}", self.api_url, endpoint)
    }

    fn transport_error(&self, err: reqwest::Error) -> RconError {
        if err.is_timeout() {
            RconError::Timeout(self.timeout.as_secs())
        } else {
            RconError::Request(err)
        }
    }

    async fn decode<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<RconResponse<T>, RconError> {
        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        serde_json::from_str(&body).map_err(|e| RconError::UnexpectedContent(e.to_string()))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<RconResponse<T>, RconError> {
        let response = self
            .http
            .get(self.endpoint(endpoint))
            .query(query)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.decode(response).await
    }

    /// Logs in, storing the session cookie for the following requests.
    ///
    /// # Returns
    /// - `Ok(())` - Logged in
    /// - `Err(RconError::Api)` - The API reported an error
    /// - `Err(RconError::Verification)` - Username or password rejected
    pub async fn login(&self, username: &str, password: &str) -> Result<(), RconError> {
        let response = self
            .http
            .post(self.endpoint(LOGIN_ENDPOINT))
            .json(&LoginRequest { username, password })
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let envelope: RconResponse<serde_json::Value> = self.decode(response).await?;
        envelope.check_error()?;

        if envelope.failed {
            return Err(RconError::Verification);
        }

        Ok(())
    }

    /// Gets the map history, most recent match first.
    pub async fn get_map_history(&self) -> Result<Vec<MapHistoryEntry>, RconError> {
        self.get(MAP_HISTORY_ENDPOINT, &[]).await?.into_result()
    }

    /// Gets the kill logs of a match window on one server.
    pub async fn get_kill_logs(
        &self,
        window: &MatchWindow,
        server_id: i32,
    ) -> Result<Vec<LogEntry>, RconError> {
        self.get(LOGS_ENDPOINT, &log_query(window, server_id))
            .await?
            .into_result()
    }

    /// Checks that `public_info` answers with an envelope that has a result.
    ///
    /// Used by the creation wizard to verify a URL before saving it.
    pub async fn check_public_info(&self) -> Result<(), RconError> {
        let envelope: RconResponse<serde_json::Value> =
            self.get(PUBLIC_INFO_ENDPOINT, &[]).await?;

        match envelope.result {
            Some(value) if !value.is_null() => Ok(()),
            _ => Err(RconError::MissingResult),
        }
    }
}

/// Query parameters of the kill log request.
fn log_query(window: &MatchWindow, server_id: i32) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("limit", LOG_LIMIT.to_string()),
        ("log_type", KILL_LOG_TYPE.to_string()),
        ("from", window.start.format(LOG_TIME_FORMAT).to_string()),
        ("server_filter", server_id.to_string()),
    ];

    if let Some(end) = window.end {
        query.push(("till", end.format(LOG_TIME_FORMAT).to_string()));
    }

    query
}

fn timestamp(secs: f64) -> Result<DateTime<Utc>, InternalError> {
    let timestamp = secs.trunc() as i64;

    DateTime::from_timestamp(timestamp, 0).ok_or(InternalError::InvalidTimestamp { timestamp })
}

/// Picks the match whose logs are shown.
///
/// Takes the most recent match unless it started less than five minutes ago, in which
/// case the previous match is shown with its end time. A history with a single entry
/// falls back to that entry.
///
/// # Arguments
/// - `history` - Map history, most recent first
/// - `now` - Current time
///
/// # Returns
/// - `Ok(MatchWindow)` - Selected match window
/// - `Err(AppError::RconErr(EmptyMapHistory))` - History is empty
/// - `Err(AppError::InternalErr(InvalidTimestamp))` - Timestamp out of range
pub fn select_match_window(
    history: &[MapHistoryEntry],
    now: DateTime<Utc>,
) -> Result<MatchWindow, AppError> {
    let current = history.first().ok_or(RconError::EmptyMapHistory)?;
    let current_start = timestamp(current.start)?;

    let recent = (now - current_start).num_seconds() < RECENT_MATCH_SECS;

    let window = match history.get(1) {
        Some(previous) if recent => MatchWindow {
            map: pretty_map_name(&previous.name),
            start: timestamp(previous.start)?,
            end: previous.end.map(timestamp).transpose()?,
        },
        _ => MatchWindow {
            map: pretty_map_name(&current.name),
            start: current_start,
            end: None,
        },
    };

    Ok(window)
}

/// Fetches and ranks the statistics of a scoreboard's current match.
///
/// Logs in, selects the match window from the map history and aggregates its kill logs.
///
/// # Arguments
/// - `scoreboard` - Scoreboard holding the API location, credentials and server filter
/// - `timeout` - Timeout applied to every request
///
/// # Returns
/// - `Ok(MatchStats)` - Match window and ranked players
/// - `Err(AppError::RconErr)` - Login, transport or API failure
pub async fn fetch_match_stats(
    scoreboard: &Scoreboard,
    timeout: Duration,
) -> Result<MatchStats, AppError> {
    let client = RconClient::new(&scoreboard.api_url, timeout)?;

    client
        .login(&scoreboard.api_user, &scoreboard.api_password)
        .await?;

    let history = client.get_map_history().await?;
    let window = select_match_window(&history, Utc::now())?;

    let logs = client.get_kill_logs(&window, scoreboard.server_id).await?;
    let players = aggregate_logs(&logs);

    tracing::debug!(
        "Fetched {} log records for scoreboard {} ({} players, map {})",
        logs.len(),
        scoreboard.name,
        players.len(),
        window.map
    );

    Ok(MatchStats { window, players })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn entry(name: &str, start: i64, end: Option<i64>) -> MapHistoryEntry {
        MapHistoryEntry {
            name: name.to_string(),
            start: start as f64,
            end: end.map(|end| end as f64),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn selects_running_match() {
        let now = now();
        let history = vec![
            entry("foy_warfare", now.timestamp() - 1200, None),
            entry("carentan_warfare", now.timestamp() - 6000, Some(now.timestamp() - 1200)),
        ];

        let window = select_match_window(&history, now).unwrap();

        assert_eq!(window.map, "Foy");
        assert_eq!(window.start.timestamp(), now.timestamp() - 1200);
        assert!(window.end.is_none());
    }

    #[test]
    fn selects_previous_match_after_recent_restart() {
        let now = now();
        let history = vec![
            entry("foy_warfare", now.timestamp() - 60, None),
            entry("carentan_warfare_RESTART", now.timestamp() - 5000, Some(now.timestamp() - 60)),
        ];

        let window = select_match_window(&history, now).unwrap();

        assert_eq!(window.map, "Carentan");
        assert_eq!(window.start.timestamp(), now.timestamp() - 5000);
        assert_eq!(window.end.unwrap().timestamp(), now.timestamp() - 60);
    }

    #[test]
    fn falls_back_to_only_match() {
        let now = now();
        let history = vec![entry("kursk_warfare", now.timestamp() - 30, None)];

        let window = select_match_window(&history, now).unwrap();

        assert_eq!(window.map, "kursk_warfare");
        assert!(window.end.is_none());
    }

    #[test]
    fn empty_history_is_an_error() {
        assert!(matches!(
            select_match_window(&[], now()),
            Err(AppError::RconErr(RconError::EmptyMapHistory))
        ));
    }

    #[test]
    fn log_query_includes_till_only_for_finished_matches() {
        let running = MatchWindow {
            map: "Foy".to_string(),
            start: now(),
            end: None,
        };
        let query = log_query(&running, 2);

        assert!(query.contains(&("from", "2024-01-01 12:00:00".to_string())));
        assert!(query.contains(&("server_filter", "2".to_string())));
        assert!(query.contains(&("limit", "999999".to_string())));
        assert!(query.contains(&("log_type", "KILL".to_string())));
        assert!(!query.iter().any(|(key, _)| *key == "till"));

        let finished = MatchWindow {
            end: Some(now() + chrono::Duration::minutes(90)),
            ..running
        };
        let query = log_query(&finished, 2);

        assert!(query.contains(&("till", "2024-01-01 13:30:00".to_string())));
    }

    #[test]
    fn builds_endpoint_urls() {
        let client =
            RconClient::new("http://127.0.0.1:8010/api/", Duration::from_secs(10)).unwrap();

        assert_eq!(client.endpoint(LOGIN_ENDPOINT), "http://127.0.0.1:8010/api/login");
    }
}
