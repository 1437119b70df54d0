//! Scoreboard factory for creating test scoreboard rows.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test scoreboards with customizable fields.
///
/// Defaults come from `fixture::scoreboard::entity_builder()`; the message id is
/// made unique per factory so the unique index is never violated by accident.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::scoreboard::ScoreboardFactory;
///
/// let scoreboard = ScoreboardFactory::new(&db)
///     .guild_id("guild_123")
///     .message_id("555")
///     .build()
///     .await?;
/// ```
pub struct ScoreboardFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::scoreboard::Model,
}

impl<'a> ScoreboardFactory<'a> {
    /// Creates a new ScoreboardFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ScoreboardFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::scoreboard::entity_builder()
            .name(format!("Scoreboard {}", id))
            .message_id(format!("{}", 100_000_000 + id))
            .build();

        Self { db, entity }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.entity.guild_id = guild_id.into();
        self
    }

    pub fn channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.entity.channel_id = channel_id.into();
        self
    }

    pub fn message_id(mut self, message_id: impl Into<String>) -> Self {
        self.entity.message_id = message_id.into();
        self
    }

    pub fn scoreboard_url(mut self, scoreboard_url: Option<impl Into<String>>) -> Self {
        self.entity.scoreboard_url = scoreboard_url.map(Into::into);
        self
    }

    pub fn server_id(mut self, server_id: i32) -> Self {
        self.entity.server_id = server_id;
        self
    }

    /// Builds and inserts the scoreboard entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::scoreboard::Model)` - Created scoreboard entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::scoreboard::Model, DbErr> {
        let now = Utc::now();

        entity::scoreboard::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            guild_id: ActiveValue::Set(self.entity.guild_id),
            channel_id: ActiveValue::Set(self.entity.channel_id),
            message_id: ActiveValue::Set(self.entity.message_id),
            api_url: ActiveValue::Set(self.entity.api_url),
            api_user: ActiveValue::Set(self.entity.api_user),
            api_password: ActiveValue::Set(self.entity.api_password),
            scoreboard_url: ActiveValue::Set(self.entity.scoreboard_url),
            server_id: ActiveValue::Set(self.entity.server_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scoreboard with default values.
///
/// Shorthand for `ScoreboardFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::scoreboard::Model)` - Created scoreboard entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_scoreboard(
    db: &DatabaseConnection,
) -> Result<entity::scoreboard::Model, DbErr> {
    ScoreboardFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_scoreboard_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Scoreboard)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let scoreboard = create_scoreboard(db).await?;

        assert!(scoreboard.id > 0);
        assert!(!scoreboard.message_id.is_empty());
        assert_eq!(scoreboard.server_id, fixture::scoreboard::DEFAULT_SERVER_ID);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_scoreboards_with_unique_message_ids() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(Scoreboard)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_scoreboard(db).await?;
        let second = create_scoreboard(db).await?;

        assert_ne!(first.message_id, second.message_id);

        Ok(())
    }
}
