use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::db::types::{title_case, JobStatus};

pub(crate) fn parse_status(raw: &str) -> Result<JobStatus, ApiError> {
    JobStatus::parse(raw)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown status {}", title_case(raw))))
}

/// Minute windows are plain decimal digits that fit in a Postgres `integer`.
pub(crate) fn parse_minutes(raw: &str) -> Result<i32, ApiError> {
    let digits_only = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
    digits_only
        .then(|| raw.parse::<i32>().ok())
        .flatten()
        .ok_or_else(|| ApiError::BadRequest(format!("can't parse {raw} as an integer")))
}

/// Only canonical lowercase, hyphenated UUIDs address a job.
pub(crate) fn parse_job_id(raw: &str) -> Result<Uuid, ApiError> {
    let not_found = || ApiError::NotFound("job not found".to_string());
    if raw.len() != 36 || raw.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(not_found());
    }
    let id = Uuid::parse_str(raw).map_err(|_| not_found())?;
    if id.hyphenated().to_string() != raw {
        return Err(not_found());
    }
    Ok(id)
}
