use sqlx::{PgPool, Postgres, QueryBuilder};
use time::PrimitiveDateTime;
use uuid::Uuid;

use crate::db::models::Job;
use crate::db::types::JobStatus;

pub(crate) const COLUMNS: &str = "\
    j.id::text AS id, \
    j.app_id::text AS app_id, \
    j.user_id::text AS user_id, \
    u.username, \
    j.status, \
    COALESCE(j.job_description, '') AS description, \
    COALESCE(j.job_name, '') AS name, \
    COALESCE(j.result_folder_path, '') AS result_folder, \
    j.start_date, \
    j.planned_end_date";

const FROM_JOBS: &str = "FROM jobs j JOIN users u ON j.user_id = u.id";

/// Mutable job fields. `None` leaves the column untouched.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct JobUpdate {
    pub(crate) status: Option<JobStatus>,
    pub(crate) planned_end_date: Option<PrimitiveDateTime>,
    pub(crate) description: Option<String>,
    pub(crate) name: Option<String>,
}

impl JobUpdate {
    pub(crate) fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.planned_end_date.is_none()
            && self.description.is_none()
            && self.name.is_none()
    }
}

/// Jobs in `status` whose planned end date has already passed.
pub(crate) async fn list_expired(
    pool: &PgPool,
    status: JobStatus,
) -> Result<Vec<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>(&format!(
        "SELECT {COLUMNS}
         {FROM_JOBS}
         WHERE j.status = $1
           AND j.planned_end_date <= NOW()"
    ))
    .bind(status.as_str())
    .fetch_all(pool)
    .await
}

/// Jobs in `status` that are not yet past their planned end date but will be
/// within `minutes`.
pub(crate) async fn list_expiring_within(
    pool: &PgPool,
    status: JobStatus,
    minutes: i32,
) -> Result<Vec<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>(&format!(
        "SELECT {COLUMNS}
         {FROM_JOBS}
         WHERE j.status = $1
           AND NOW() < j.planned_end_date
           AND j.planned_end_date <= NOW() + make_interval(mins => $2)"
    ))
    .bind(status.as_str())
    .bind(minutes)
    .fetch_all(pool)
    .await
}

pub(crate) async fn find_by_id(
    executor: impl sqlx::PgExecutor<'_>,
    id: Uuid,
) -> Result<Option<Job>, sqlx::Error> {
    sqlx::query_as::<_, Job>(&format!(
        "SELECT {COLUMNS}
         {FROM_JOBS}
         WHERE j.id = $1"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
}

/// Applies every present field of `update` in a single statement and returns
/// the number of rows touched (0 when the job does not exist).
pub(crate) async fn update(
    executor: impl sqlx::PgExecutor<'_>,
    id: Uuid,
    update: JobUpdate,
) -> Result<u64, sqlx::Error> {
    if update.is_empty() {
        return Err(sqlx::Error::Protocol("job update has no fields".to_string()));
    }

    let mut builder = build_update(id, update);
    let result = builder.build().execute(executor).await?;
    Ok(result.rows_affected())
}

fn build_update(id: Uuid, update: JobUpdate) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::<Postgres>::new("UPDATE ONLY jobs SET ");
    {
        let mut assignments = builder.separated(", ");
        if let Some(status) = update.status {
            assignments.push("status = ");
            assignments.push_bind_unseparated(status.as_str());
        }
        if let Some(planned_end_date) = update.planned_end_date {
            assignments.push("planned_end_date = ");
            assignments.push_bind_unseparated(planned_end_date);
        }
        if let Some(description) = update.description {
            assignments.push("job_description = ");
            assignments.push_bind_unseparated(description);
        }
        if let Some(name) = update.name {
            assignments.push("job_name = ");
            assignments.push_bind_unseparated(name);
        }
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id);
    builder
}
