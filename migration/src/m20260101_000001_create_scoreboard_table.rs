use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Scoreboard::Table)
                    .if_not_exists()
                    .col(pk_auto(Scoreboard::Id))
                    .col(string(Scoreboard::Name))
                    .col(string(Scoreboard::GuildId))
                    .col(string(Scoreboard::ChannelId))
                    .col(string(Scoreboard::MessageId))
                    .col(string(Scoreboard::ApiUrl))
                    .col(string(Scoreboard::ApiUser))
                    .col(string(Scoreboard::ApiPassword))
                    .col(string_null(Scoreboard::ScoreboardUrl))
                    .col(integer(Scoreboard::ServerId))
                    .col(timestamp(Scoreboard::CreatedAt))
                    .col(timestamp(Scoreboard::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        // One row per Discord message
        manager
            .create_index(
                Index::create()
                    .name("idx_scoreboard_message_id")
                    .table(Scoreboard::Table)
                    .col(Scoreboard::MessageId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_scoreboard_guild_id")
                    .table(Scoreboard::Table)
                    .col(Scoreboard::GuildId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_scoreboard_guild_id")
                    .table(Scoreboard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_scoreboard_message_id")
                    .table(Scoreboard::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Scoreboard::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Scoreboard {
    Table,
    Id,
    Name,
    GuildId,
    ChannelId,
    MessageId,
    ApiUrl,
    ApiUser,
    ApiPassword,
    ScoreboardUrl,
    ServerId,
    CreatedAt,
    UpdatedAt,
}
