use super::*;

/// Tests overwriting a scoreboard's configuration.
///
/// Expected: Ok with every changed field persisted
#[tokio::test]
async fn updates_all_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scoreboard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScoreboardRepository::new(db);
    let scoreboard = repo.create(create_param(555)).await?;

    let mut param = UpdateScoreboardParam::from_scoreboard(&scoreboard);
    param.name = "Renamed".to_string();
    param.channel_id = 333;
    param.scoreboard_url = Some("https://stats.example.com/#/gamescoreboard".to_string());
    param.server_id = 2;

    let updated = repo.update(param).await?;

    assert_eq!(updated.id, scoreboard.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.channel_id, 333);
    assert_eq!(updated.message_id, 555);
    assert_eq!(updated.server_id, 2);
    assert!(updated.scoreboard_url.is_some());
    assert!(updated.updated_at >= scoreboard.updated_at);

    Ok(())
}

/// Tests updating a row that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_scoreboard() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scoreboard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScoreboardRepository::new(db);
    let scoreboard = repo.create(create_param(555)).await?;

    let mut param = UpdateScoreboardParam::from_scoreboard(&scoreboard);
    param.id = scoreboard.id + 100;

    assert!(matches!(repo.update(param).await, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests re-keying a scoreboard to a new message.
///
/// Expected: Ok with the row found under the new message id only
#[tokio::test]
async fn updates_message_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Scoreboard)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ScoreboardRepository::new(db);
    let scoreboard = repo.create(create_param(555)).await?;

    let updated = repo.update_message_id(scoreboard.id, 777).await?;

    assert_eq!(updated.message_id, 777);
    assert!(repo.get_by_message_id(555).await?.is_none());
    assert!(repo.get_by_message_id(777).await?.is_some());

    Ok(())
}
