//! Error types for the scoreboard bot.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors so `?` works across the
//! data, service and bot layers. Errors never escape the update loop or a command
//! handler; they are logged and, where a user is waiting, rendered into an embed.

pub mod config;
pub mod internal;
pub mod rcon;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, rcon::RconError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application. Most variants
/// use `#[from]` for automatic error conversion. The message variants carry text that is
/// shown to Discord users as-is.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Failure while talking to the RCON API of a scoreboard.
    #[error(transparent)]
    RconErr(#[from] RconError),

    /// Internal issue such as a stored snowflake that fails to parse.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid command argument or option value.
    ///
    /// # Fields
    /// - Message describing what was invalid about the input
    #[error("{0}")]
    BadRequest(String),

    /// The invoking member lacks the permission a command requires.
    #[error("{0}")]
    PermissionDenied(String),

    /// Internal error with custom message.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Returns true when the error is Discord reporting that a resource no longer exists.
    ///
    /// Used to tell a deleted scoreboard message apart from any other failure when
    /// fetching it.
    pub fn is_discord_not_found(&self) -> bool {
        use serenity::all::HttpError;

        match self {
            AppError::DiscordErr(err) => match err.as_ref() {
                serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) => {
                    response.status_code.as_u16() == 404
                }
                _ => false,
            },
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_variants_display_their_text() {
        let err = AppError::BadRequest("Unknown option `colour`".to_string());
        assert_eq!(err.to_string(), "Unknown option `colour`");
    }

    #[test]
    fn rcon_errors_are_transparent() {
        let err: AppError = RconError::Api("Bad things".to_string()).into();
        assert_eq!(err.to_string(), "Bad things");
    }

    #[test]
    fn non_discord_errors_are_not_not_found() {
        assert!(!AppError::NotFound("x".to_string()).is_discord_not_found());
    }
}
