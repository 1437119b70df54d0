use std::time::Duration;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://data.db?mode=rwc";
const DEFAULT_COMMAND_PREFIX: &str = "s!";
const DEFAULT_UPDATE_SCHEDULE: &str = "0 * * * * *";
const DEFAULT_RCON_TIMEOUT_SECS: u64 = 10;
const DEFAULT_BOT_STATUS: &str = "https://github.com/timraay/HLLScoreboard";

pub struct Config {
    pub discord_bot_token: String,
    pub database_url: String,

    /// Prefix every command message starts with, e.g. `s!list`.
    pub command_prefix: String,
    /// Cron expression for the scoreboard update pass.
    pub update_schedule: String,
    /// Request timeout for every RCON API call.
    pub rcon_timeout: Duration,
    /// Text of the "playing" activity set on ready.
    pub bot_status: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            database_url: env_or("DATABASE_URL", DEFAULT_DATABASE_URL),
            command_prefix: non_empty(
                "COMMAND_PREFIX",
                env_or("COMMAND_PREFIX", DEFAULT_COMMAND_PREFIX),
            )?,
            update_schedule: env_or("UPDATE_SCHEDULE", DEFAULT_UPDATE_SCHEDULE),
            rcon_timeout: Duration::from_secs(parse_timeout(
                std::env::var("RCON_TIMEOUT_SECS").ok(),
            )?),
            bot_status: env_or("BOT_STATUS", DEFAULT_BOT_STATUS),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn non_empty(name: &str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: "must not be empty".to_string(),
        });
    }

    Ok(value)
}

fn parse_timeout(value: Option<String>) -> Result<u64, ConfigError> {
    let Some(value) = value else {
        return Ok(DEFAULT_RCON_TIMEOUT_SECS);
    };

    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidEnvVar {
            name: "RCON_TIMEOUT_SECS".to_string(),
            reason: format!("expected a positive number of seconds, got '{}'", value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_defaults_when_unset() {
        assert_eq!(parse_timeout(None).unwrap(), DEFAULT_RCON_TIMEOUT_SECS);
    }

    #[test]
    fn timeout_parses_seconds() {
        assert_eq!(parse_timeout(Some("30".to_string())).unwrap(), 30);
    }

    #[test]
    fn timeout_rejects_zero_and_garbage() {
        assert!(matches!(
            parse_timeout(Some("0".to_string())),
            Err(ConfigError::InvalidEnvVar { .. })
        ));
        assert!(parse_timeout(Some("ten".to_string())).is_err());
    }

    #[test]
    fn empty_prefix_is_invalid() {
        assert!(non_empty("COMMAND_PREFIX", "  ".to_string()).is_err());
        assert_eq!(non_empty("COMMAND_PREFIX", "s!".to_string()).unwrap(), "s!");
    }
}
