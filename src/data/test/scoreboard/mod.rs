use crate::{
    data::scoreboard::ScoreboardRepository,
    error::AppError,
    model::scoreboard::{CreateScoreboardParam, UpdateScoreboardParam},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_message_id;
mod update;

fn create_param(message_id: u64) -> CreateScoreboardParam {
    CreateScoreboardParam {
        name: "Server #1".to_string(),
        guild_id: 987654321,
        channel_id: 111111111,
        message_id,
        api_url: "http://127.0.0.1:8010/api/".to_string(),
        api_user: "admin".to_string(),
        api_password: "hunter2".to_string(),
        scoreboard_url: None,
        server_id: 1,
    }
}
