use std::num::ParseIntError;
use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// Failure to parse id from String
    ///
    /// Snowflakes are stored as text, so a row that does not hold a valid `u64`
    /// means the table was edited by hand or written by a bug.
    #[error("Failed to parse ID from String '{value}': {source}")]
    ParseStringId {
        /// The string value that failed to parse
        value: String,
        /// The underlying parse error
        #[source]
        source: ParseIntError,
    },

    /// Failure to convert a Unix timestamp reported by the RCON API.
    #[error("Received invalid Unix timestamp {timestamp} from the RCON")]
    InvalidTimestamp {
        /// The Unix timestamp that failed to convert
        timestamp: i64,
    },
}
