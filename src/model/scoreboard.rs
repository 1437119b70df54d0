//! Domain & parameter models for scoreboard operations
//!
//! Defines the scoreboard domain model, the parameter models used to create and
//! update rows, and the set of options users can change with the `set` command.

use chrono::{DateTime, Utc};

use crate::{error::AppError, util::parse::parse_u64_from_string};

/// A configured leaderboard bound to one Discord message.
#[derive(Debug, Clone, PartialEq)]
pub struct Scoreboard {
    pub id: i32,
    pub name: String,
    pub guild_id: u64,
    pub channel_id: u64,
    /// Message the leaderboard embed lives in. Unique across all scoreboards.
    pub message_id: u64,
    /// RCON API base URL, always ending with `/`.
    pub api_url: String,
    pub api_user: String,
    pub api_password: String,
    /// Public "extended view" page linked below the table.
    pub scoreboard_url: Option<String>,
    /// Server filter passed to the log query.
    pub server_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Scoreboard {
    /// Converts an entity model to the scoreboard domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Ok(Scoreboard)` - The converted scoreboard domain model
    /// - `Err(AppError::InternalErr(ParseStringId))` - A stored snowflake is not a valid u64
    pub fn from_entity(entity: entity::scoreboard::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            guild_id: parse_u64_from_string(entity.guild_id)?,
            channel_id: parse_u64_from_string(entity.channel_id)?,
            message_id: parse_u64_from_string(entity.message_id)?,
            api_url: entity.api_url,
            api_user: entity.api_user,
            api_password: entity.api_password,
            scoreboard_url: entity.scoreboard_url,
            server_id: entity.server_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Link that jumps to the scoreboard message in the Discord client.
    pub fn jump_url(&self) -> String {
        format!(
            "https://discord.com/channels/{}/{}/{}",
            self.guild_id, self.channel_id, self.message_id
        )
    }
}

/// Parameters for creating a new scoreboard row.
///
/// The message id is the id of the placeholder message already posted in the
/// target channel.
#[derive(Debug, Clone)]
pub struct CreateScoreboardParam {
    pub name: String,
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub api_url: String,
    pub api_user: String,
    pub api_password: String,
    pub scoreboard_url: Option<String>,
    pub server_id: i32,
}

impl CreateScoreboardParam {
    /// Combines wizard settings with the location of the posted placeholder.
    pub fn new(
        settings: ScoreboardSettings,
        guild_id: u64,
        channel_id: u64,
        message_id: u64,
    ) -> Self {
        Self {
            name: settings.name,
            guild_id,
            channel_id,
            message_id,
            api_url: settings.api_url,
            api_user: settings.api_user,
            api_password: settings.api_password,
            scoreboard_url: settings.scoreboard_url,
            server_id: settings.server_id,
        }
    }
}

/// Validated answers of the creation wizard, minus the target channel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreboardSettings {
    pub name: String,
    pub api_url: String,
    pub api_user: String,
    pub api_password: String,
    pub scoreboard_url: Option<String>,
    pub server_id: i32,
}

impl ScoreboardSettings {
    /// Stores one wizard answer. Channel answers are kept by the wizard itself.
    pub fn apply(&mut self, change: ScoreboardChange) {
        match change {
            ScoreboardChange::Name(name) => self.name = name,
            ScoreboardChange::Channel(_) => {}
            ScoreboardChange::ApiUrl(api_url) => self.api_url = api_url,
            ScoreboardChange::ApiUser(api_user) => self.api_user = api_user,
            ScoreboardChange::ApiPassword(api_password) => self.api_password = api_password,
            ScoreboardChange::ScoreboardUrl(scoreboard_url) => self.scoreboard_url = scoreboard_url,
            ScoreboardChange::ServerId(server_id) => self.server_id = server_id,
        }
    }
}

/// Parameters for updating an existing scoreboard row.
///
/// Every field overwrites the stored value of the row with the given id.
#[derive(Debug, Clone)]
pub struct UpdateScoreboardParam {
    pub id: i32,
    pub name: String,
    pub channel_id: u64,
    pub message_id: u64,
    pub api_url: String,
    pub api_user: String,
    pub api_password: String,
    pub scoreboard_url: Option<String>,
    pub server_id: i32,
}

impl UpdateScoreboardParam {
    /// Starts an update from the current state of a scoreboard.
    pub fn from_scoreboard(scoreboard: &Scoreboard) -> Self {
        Self {
            id: scoreboard.id,
            name: scoreboard.name.clone(),
            channel_id: scoreboard.channel_id,
            message_id: scoreboard.message_id,
            api_url: scoreboard.api_url.clone(),
            api_user: scoreboard.api_user.clone(),
            api_password: scoreboard.api_password.clone(),
            scoreboard_url: scoreboard.scoreboard_url.clone(),
            server_id: scoreboard.server_id,
        }
    }
}

/// A single validated option change requested with the `set` command.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoreboardChange {
    Name(String),
    Channel(u64),
    ApiUrl(String),
    ApiUser(String),
    ApiPassword(String),
    ScoreboardUrl(Option<String>),
    ServerId(i32),
}

impl ScoreboardChange {
    /// Writes the new value into an update.
    ///
    /// A channel change only sets the channel; the caller is responsible for moving
    /// the message and setting the new message id.
    pub fn apply(self, param: &mut UpdateScoreboardParam) {
        match self {
            ScoreboardChange::Name(name) => param.name = name,
            ScoreboardChange::Channel(channel_id) => param.channel_id = channel_id,
            ScoreboardChange::ApiUrl(api_url) => param.api_url = api_url,
            ScoreboardChange::ApiUser(api_user) => param.api_user = api_user,
            ScoreboardChange::ApiPassword(api_password) => param.api_password = api_password,
            ScoreboardChange::ScoreboardUrl(scoreboard_url) => {
                param.scoreboard_url = scoreboard_url
            }
            ScoreboardChange::ServerId(server_id) => param.server_id = server_id,
        }
    }

    pub fn option(&self) -> ScoreboardOption {
        match self {
            ScoreboardChange::Name(_) => ScoreboardOption::Name,
            ScoreboardChange::Channel(_) => ScoreboardOption::Channel,
            ScoreboardChange::ApiUrl(_) => ScoreboardOption::ApiUrl,
            ScoreboardChange::ApiUser(_) => ScoreboardOption::ApiUser,
            ScoreboardChange::ApiPassword(_) => ScoreboardOption::ApiPassword,
            ScoreboardChange::ScoreboardUrl(_) => ScoreboardOption::ScoreboardUrl,
            ScoreboardChange::ServerId(_) => ScoreboardOption::ServerId,
        }
    }
}

/// Option names accepted by the `set` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreboardOption {
    Name,
    Channel,
    ApiUrl,
    ApiUser,
    ApiPassword,
    ScoreboardUrl,
    ServerId,
}

impl ScoreboardOption {
    pub const ALL: [ScoreboardOption; 7] = [
        ScoreboardOption::Name,
        ScoreboardOption::Channel,
        ScoreboardOption::ApiUrl,
        ScoreboardOption::ApiUser,
        ScoreboardOption::ApiPassword,
        ScoreboardOption::ScoreboardUrl,
        ScoreboardOption::ServerId,
    ];

    /// Parses an option name as typed by a user, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(value))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreboardOption::Name => "name",
            ScoreboardOption::Channel => "channel",
            ScoreboardOption::ApiUrl => "api_url",
            ScoreboardOption::ApiUser => "api_user",
            ScoreboardOption::ApiPassword => "api_pw",
            ScoreboardOption::ScoreboardUrl => "scoreboard_url",
            ScoreboardOption::ServerId => "server_id",
        }
    }

    /// Comma separated list of every option, as shown in help texts.
    pub fn list() -> String {
        Self::ALL
            .iter()
            .map(|option| option.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
