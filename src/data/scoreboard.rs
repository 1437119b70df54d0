//! Scoreboard data repository for database operations.
//!
//! This module provides the `ScoreboardRepository` for managing the single `scoreboard`
//! table. Each row binds one Discord message to an RCON API. Rows are keyed by the
//! surrogate id for updates and looked up by message id from Discord events.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::{
    error::AppError,
    model::scoreboard::{CreateScoreboardParam, Scoreboard, UpdateScoreboardParam},
};

/// Repository providing database operations for scoreboard management.
pub struct ScoreboardRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ScoreboardRepository<'a> {
    /// Creates a new ScoreboardRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ScoreboardRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new scoreboard row.
    ///
    /// # Arguments
    /// - `param` - Scoreboard configuration including the id of its posted message
    ///
    /// # Returns
    /// - `Ok(Scoreboard)` - The created scoreboard
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate message id
    pub async fn create(&self, param: CreateScoreboardParam) -> Result<Scoreboard, AppError> {
        let now = Utc::now();

        let entity = entity::scoreboard::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(param.name),
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            channel_id: ActiveValue::Set(param.channel_id.to_string()),
            message_id: ActiveValue::Set(param.message_id.to_string()),
            api_url: ActiveValue::Set(param.api_url),
            api_user: ActiveValue::Set(param.api_user),
            api_password: ActiveValue::Set(param.api_password),
            scoreboard_url: ActiveValue::Set(param.scoreboard_url),
            server_id: ActiveValue::Set(param.server_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        Scoreboard::from_entity(entity)
    }

    /// Gets every scoreboard in insertion order.
    ///
    /// Used once on startup to fill the in-memory registry.
    pub async fn get_all(&self) -> Result<Vec<Scoreboard>, AppError> {
        entity::prelude::Scoreboard::find()
            .order_by_asc(entity::scoreboard::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Scoreboard::from_entity)
            .collect()
    }

    /// Gets the scoreboard displayed in the given message.
    ///
    /// # Arguments
    /// - `message_id` - Discord message ID of the scoreboard embed
    ///
    /// # Returns
    /// - `Ok(Some(Scoreboard))` - Scoreboard found
    /// - `Ok(None)` - No scoreboard uses this message
    /// - `Err(AppError)` - Database error or corrupt row
    pub async fn get_by_message_id(&self, message_id: u64) -> Result<Option<Scoreboard>, AppError> {
        let entity = entity::prelude::Scoreboard::find()
            .filter(entity::scoreboard::Column::MessageId.eq(message_id.to_string()))
            .one(self.db)
            .await?;

        entity.map(Scoreboard::from_entity).transpose()
    }

    /// Overwrites the configuration of an existing scoreboard.
    ///
    /// # Arguments
    /// - `param` - New values for every column, keyed by the row id
    ///
    /// # Returns
    /// - `Ok(Scoreboard)` - The updated scoreboard
    /// - `Err(AppError::NotFound)` - No row with this id
    /// - `Err(AppError::DbErr)` - Database error, including a duplicate message id
    pub async fn update(&self, param: UpdateScoreboardParam) -> Result<Scoreboard, AppError> {
        let existing = entity::prelude::Scoreboard::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Scoreboard {} not found", param.id)))?;

        let mut active: entity::scoreboard::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.channel_id = ActiveValue::Set(param.channel_id.to_string());
        active.message_id = ActiveValue::Set(param.message_id.to_string());
        active.api_url = ActiveValue::Set(param.api_url);
        active.api_user = ActiveValue::Set(param.api_user);
        active.api_password = ActiveValue::Set(param.api_password);
        active.scoreboard_url = ActiveValue::Set(param.scoreboard_url);
        active.server_id = ActiveValue::Set(param.server_id);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Scoreboard::from_entity(entity)
    }

    /// Points a scoreboard at a newly posted message.
    ///
    /// # Arguments
    /// - `id` - Row id of the scoreboard
    /// - `message_id` - ID of the replacement message
    ///
    /// # Returns
    /// - `Ok(Scoreboard)` - The re-keyed scoreboard
    /// - `Err(AppError::NotFound)` - No row with this id
    pub async fn update_message_id(
        &self,
        id: i32,
        message_id: u64,
    ) -> Result<Scoreboard, AppError> {
        let existing = entity::prelude::Scoreboard::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Scoreboard {} not found", id)))?;

        let mut active: entity::scoreboard::ActiveModel = existing.into();
        active.message_id = ActiveValue::Set(message_id.to_string());
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Scoreboard::from_entity(entity)
    }

    /// Deletes the scoreboard displayed in the given message.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No scoreboard uses this message
    pub async fn delete_by_message_id(&self, message_id: u64) -> Result<bool, AppError> {
        let result = entity::prelude::Scoreboard::delete_many()
            .filter(entity::scoreboard::Column::MessageId.eq(message_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
