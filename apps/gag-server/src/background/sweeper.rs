//! Periodic removal of idle views.

use tokio_cron_scheduler::JobSchedulerError;

use super::Scheduler;
use crate::state::AppState;

/// Register the job that drops views idle past their TTL.
pub async fn register_view_sweeper(
    scheduler: &Scheduler,
    state: AppState,
) -> Result<uuid::Uuid, JobSchedulerError> {
    let schedule = scheduler.config().sweep_schedule.clone();

    scheduler
        .add_cron(&schedule, move || {
            let state = state.clone();
            async move {
                let dropped = state.purge_expired_views().await;
                if dropped > 0 {
                    tracing::info!(dropped, "Idle views dropped");
                }
            }
        })
        .await
}
