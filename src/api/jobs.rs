use axum::{body::Bytes, extract::State, routing::get, Json, Router};
use validator::Validate;

use crate::api::errors::ApiError;
use crate::api::extract::PathParams;
use crate::api::validation::{parse_job_id, parse_minutes, parse_status};
use crate::core::metrics;
use crate::core::state::AppState;
use crate::core::time::from_epoch_millis;
use crate::repositories;
use crate::repositories::jobs::JobUpdate;
use crate::schemas::job::{JobListResponse, JobPatch, JobResponse};
use crate::schemas::status_update::{StatusUpdateResponse, StatusUpdatesResponse};

pub(crate) fn router() -> Router<AppState> {
    Router::new()
        .route("/expired/:status", get(expired_by_status))
        .route("/expires-in/:minutes/:status", get(expires_in_by_status))
        .route("/id/:id", get(get_by_id).patch(update_by_id))
        .route("/id/:id/status-updates", get(status_updates))
}

async fn expired_by_status(
    PathParams(status): PathParams<String>,
    State(state): State<AppState>,
) -> Result<Json<JobListResponse>, ApiError> {
    let status = parse_status(&status)?;

    let jobs = repositories::jobs::list_expired(state.db(), status)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list expired jobs"))?;

    metrics::record_jobs_returned("expired", jobs.len());
    Ok(Json(JobListResponse::from_db(jobs)))
}

async fn expires_in_by_status(
    PathParams((minutes, status)): PathParams<(String, String)>,
    State(state): State<AppState>,
) -> Result<Json<JobListResponse>, ApiError> {
    let status = parse_status(&status)?;
    let minutes = parse_minutes(&minutes)?;

    let jobs = repositories::jobs::list_expiring_within(state.db(), status, minutes)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list expiring jobs"))?;

    metrics::record_jobs_returned("expires_in", jobs.len());
    Ok(Json(JobListResponse::from_db(jobs)))
}

async fn get_by_id(
    PathParams(id): PathParams<String>,
    State(state): State<AppState>,
) -> Result<Json<JobResponse>, ApiError> {
    let id = parse_job_id(&id)?;

    let job = repositories::jobs::find_by_id(state.db(), id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch job"))?
        .ok_or_else(|| ApiError::NotFound("job not found".to_string()))?;

    Ok(Json(JobResponse::from_db(job)))
}

async fn update_by_id(
    PathParams(id): PathParams<String>,
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<JobResponse>, ApiError> {
    let result = apply_patch(&state, &id, &body).await;
    metrics::record_job_patch(patch_outcome(&result));
    result.map(Json)
}

async fn apply_patch(state: &AppState, id: &str, body: &[u8]) -> Result<JobResponse, ApiError> {
    let id = parse_job_id(id)?;
    let update = decode_patch(body)?;

    let mut tx = state
        .db()
        .begin()
        .await
        .map_err(|e| ApiError::internal(e, "Failed to start transaction"))?;

    let touched = repositories::jobs::update(&mut *tx, id, update)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to update job"))?;
    if touched == 0 {
        return Err(ApiError::NotFound("job not found".to_string()));
    }

    let job = repositories::jobs::find_by_id(&mut *tx, id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to fetch updated job"))?
        .ok_or_else(|| ApiError::NotFound("job not found".to_string()))?;

    tx.commit().await.map_err(|e| ApiError::internal(e, "Failed to commit job update"))?;

    tracing::info!(job_id = %id, status = %job.status, "job patched");
    Ok(JobResponse::from_db(job))
}

/// Metric label for how a PATCH ended.
fn patch_outcome<T>(result: &Result<T, ApiError>) -> &'static str {
    match result {
        Ok(_) => "applied",
        Err(ApiError::BadRequest(_)) => "rejected",
        Err(ApiError::NotFound(_)) => "not_found",
        Err(ApiError::Internal(_)) => "error",
    }
}

async fn status_updates(
    PathParams(id): PathParams<String>,
    State(state): State<AppState>,
) -> Result<Json<StatusUpdatesResponse>, ApiError> {
    let id = parse_job_id(&id)?;

    let updates = repositories::status_updates::list_for_job(state.db(), id)
        .await
        .map_err(|e| ApiError::internal(e, "Failed to list status updates"))?;

    Ok(Json(StatusUpdatesResponse {
        status_updates: updates.into_iter().map(StatusUpdateResponse::from_db).collect(),
    }))
}

/// Turns a PATCH body into a column update. The body must be a JSON object
/// carrying at least one of the mutable fields.
fn decode_patch(body: &[u8]) -> Result<JobUpdate, ApiError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("invalid JSON body: {e}")))?;
    if !value.is_object() {
        return Err(ApiError::BadRequest("patch body must be a JSON object".to_string()));
    }

    let patch: JobPatch = serde_json::from_value(value)
        .map_err(|e| ApiError::BadRequest(format!("invalid patch: {e}")))?;
    patch.validate().map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let status = patch.status.as_deref().map(parse_status).transpose()?;
    let planned_end_date = match patch.planned_end_date {
        Some(millis) => Some(from_epoch_millis(millis).ok_or_else(|| {
            ApiError::BadRequest(format!("planned_end_date {millis} is out of range"))
        })?),
        None => None,
    };

    let update =
        JobUpdate { status, planned_end_date, description: patch.description, name: patch.name };
    if update.is_empty() {
        return Err(ApiError::BadRequest("nothing in patch".to_string()));
    }

    Ok(update)
}
