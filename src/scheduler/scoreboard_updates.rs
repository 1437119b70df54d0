use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::{sync::Arc, time::Duration};
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::{
    error::AppError,
    service::{registry::ScoreboardRegistry, scoreboard::ScoreboardService},
};

/// Starts the scoreboard update scheduler
///
/// Every tick refreshes all live scoreboards one after another. A tick that fires while
/// the previous pass is still running is skipped.
///
/// # Arguments
/// - `schedule`: Cron expression with seconds, e.g. `0 * * * * *` for every minute
/// - `db`: Database connection
/// - `discord_http`: Discord HTTP client for editing the scoreboard messages
/// - `registry`: Live scoreboards shared with the event handlers
/// - `rcon_timeout`: Timeout applied to every RCON request
///
/// # Returns
/// - `Ok(())` - Scheduler started
/// - `Err(AppError::SchedulerErr)` - Invalid cron expression or scheduler failure
pub async fn start_scheduler(
    schedule: &str,
    db: DatabaseConnection,
    discord_http: Arc<Http>,
    registry: ScoreboardRegistry,
    rcon_timeout: Duration,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let http = discord_http.clone();
        let registry = registry.clone();

        Box::pin(async move {
            ScoreboardService::new(&db, http, &registry, rcon_timeout)
                .update_all()
                .await;
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Scoreboard update scheduler started ({})", schedule);

    Ok(())
}
