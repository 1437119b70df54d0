//! Errors raised while fetching data from a community RCON API.
//!
//! The display text of each variant is shown on the scoreboard message when an
//! update fails, so it is written for server admins rather than developers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RconError {
    /// The API answered with a non-empty `error` field.
    #[error("{0}")]
    Api(String),

    /// The login call answered with `failed: true`.
    #[error("Failed to login to the RCON. Check if the username and password are correct.")]
    Verification,

    /// The body was not the JSON envelope the API returns.
    #[error("Webpage returned unexpected data. Likely the URL is incorrect.\n\nRaw data:\n{0}")]
    UnexpectedContent(String),

    /// The envelope decoded but carried no `result`.
    #[error("Connected, but received unexpected data")]
    MissingResult,

    /// No answer within the configured request timeout.
    #[error("Could not resolve host within {0} seconds. Check if the URL is correct and the RCON tool is running.")]
    Timeout(u64),

    /// `get_map_history` returned no matches.
    #[error("The RCON has no map history yet.")]
    EmptyMapHistory,

    /// Any other transport failure.
    #[error(transparent)]
    Request(reqwest::Error),
}
