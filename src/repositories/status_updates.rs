use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::StatusUpdate;

/// Status updates for every step of the job, oldest first.
pub(crate) async fn list_for_job(
    pool: &PgPool,
    job_id: Uuid,
) -> Result<Vec<StatusUpdate>, sqlx::Error> {
    sqlx::query_as::<_, StatusUpdate>(
        "SELECT j.id::text AS id,
                u.external_id,
                u.status,
                u.sent_from,
                u.sent_on,
                u.propagated,
                u.propagation_attempts,
                u.last_propagation_attempt,
                u.created_date
         FROM jobs j
         JOIN job_steps s ON j.id = s.job_id
         JOIN job_status_updates u ON s.external_id = u.external_id
         WHERE j.id = $1
         ORDER BY u.sent_on ASC",
    )
    .bind(job_id)
    .fetch_all(pool)
    .await
}
