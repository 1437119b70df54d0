use sea_orm::entity::prelude::*;

/// One configured scoreboard bound to a Discord message.
///
/// Discord snowflakes are stored as strings; `message_id` is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "scoreboard")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub guild_id: String,
    pub channel_id: String,
    #[sea_orm(unique)]
    pub message_id: String,
    pub api_url: String,
    pub api_user: String,
    pub api_password: String,
    pub scoreboard_url: Option<String>,
    pub server_id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
