//! Scoreboard fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating scoreboard entity models without database insertion.

use chrono::{DateTime, TimeZone, Utc};
use entity::scoreboard;

/// Default test scoreboard name.
pub const DEFAULT_NAME: &str = "Test Scoreboard";

/// Default test guild ID.
pub const DEFAULT_GUILD_ID: &str = "987654321";

/// Default test channel ID.
pub const DEFAULT_CHANNEL_ID: &str = "111111111";

/// Default test message ID.
pub const DEFAULT_MESSAGE_ID: &str = "222222222";

/// Default RCON API base URL.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:8010/api/";

/// Default RCON API user.
pub const DEFAULT_API_USER: &str = "admin";

/// Default RCON API password.
pub const DEFAULT_API_PASSWORD: &str = "hunter2";

/// Default server filter.
pub const DEFAULT_SERVER_ID: i32 = 1;

/// Fixed timestamp used for `created_at` and `updated_at`.
pub fn default_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a scoreboard entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Scoreboard"`
/// - guild_id: `"987654321"`
/// - channel_id: `"111111111"`
/// - message_id: `"222222222"`
/// - api_url: `"http://127.0.0.1:8010/api/"`
/// - scoreboard_url: `None`
/// - server_id: `1`
///
/// # Returns
/// - `scoreboard::Model` - In-memory scoreboard entity
pub fn entity() -> scoreboard::Model {
    entity_builder().build()
}

/// Creates a scoreboard entity builder for customization.
///
/// # Returns
/// - `ScoreboardEntityBuilder` - Builder instance with default values
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let scoreboard = fixture::scoreboard::entity_builder()
///     .message_id("333")
///     .scoreboard_url(Some("https://stats.example.com/#/gamescoreboard"))
///     .build();
/// ```
pub fn entity_builder() -> ScoreboardEntityBuilder {
    ScoreboardEntityBuilder::default()
}

/// Builder for creating customized scoreboard entity models.
pub struct ScoreboardEntityBuilder {
    model: scoreboard::Model,
}

impl Default for ScoreboardEntityBuilder {
    fn default() -> Self {
        Self {
            model: scoreboard::Model {
                id: 1,
                name: DEFAULT_NAME.to_string(),
                guild_id: DEFAULT_GUILD_ID.to_string(),
                channel_id: DEFAULT_CHANNEL_ID.to_string(),
                message_id: DEFAULT_MESSAGE_ID.to_string(),
                api_url: DEFAULT_API_URL.to_string(),
                api_user: DEFAULT_API_USER.to_string(),
                api_password: DEFAULT_API_PASSWORD.to_string(),
                scoreboard_url: None,
                server_id: DEFAULT_SERVER_ID,
                created_at: default_timestamp(),
                updated_at: default_timestamp(),
            },
        }
    }
}

impl ScoreboardEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.model.guild_id = guild_id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.model.channel_id = channel_id.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.model.message_id = message_id.into();
        self
    }

    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.model.api_url = api_url.into();
        self
    }

    pub fn api_user(mut self, api_user: impl Into<String>) -> Self {
        self.model.api_user = api_user.into();
        self
    }

    pub fn api_password(mut self, api_password: impl Into<String>) -> Self {
        self.model.api_password = api_password.into();
        self
    }

    pub fn scoreboard_url(mut self, scoreboard_url: Option<impl Into<String>>) -> Self {
        self.model.scoreboard_url = scoreboard_url.map(Into::into);
        self
    }

    pub fn server_id(mut self, server_id: i32) -> Self {
        self.model.server_id = server_id;
        self
    }

    /// Builds the scoreboard entity model.
    ///
    /// # Returns
    /// - `scoreboard::Model` - In-memory scoreboard entity with configured values
    pub fn build(self) -> scoreboard::Model {
        self.model
    }
}
