use serde::{Deserialize, Serialize};
use time::PrimitiveDateTime;
use validator::Validate;

use crate::core::time::millis_option;
use crate::db::models::Job;

#[derive(Debug, Serialize)]
pub(crate) struct JobResponse {
    pub(crate) id: String,
    pub(crate) app_id: String,
    pub(crate) user_id: String,
    pub(crate) username: String,
    pub(crate) status: String,
    pub(crate) description: String,
    pub(crate) name: String,
    pub(crate) result_folder: String,
    #[serde(with = "millis_option")]
    pub(crate) start_date: Option<PrimitiveDateTime>,
    #[serde(with = "millis_option")]
    pub(crate) planned_end_date: Option<PrimitiveDateTime>,
}

impl JobResponse {
    pub(crate) fn from_db(job: Job) -> Self {
        Self {
            id: job.id,
            app_id: job.app_id,
            user_id: job.user_id,
            username: job.username,
            status: job.status,
            description: job.description,
            name: job.name,
            result_folder: job.result_folder,
            start_date: job.start_date,
            planned_end_date: job.planned_end_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct JobListResponse {
    pub(crate) jobs: Vec<JobResponse>,
}

impl JobListResponse {
    pub(crate) fn from_db(jobs: Vec<Job>) -> Self {
        Self { jobs: jobs.into_iter().map(JobResponse::from_db).collect() }
    }
}

/// Body of `PATCH /id/:id`. Fields that are absent (or `null`) are left alone;
/// anything else in the object is ignored.
#[derive(Debug, Default, Deserialize, Validate)]
pub(crate) struct JobPatch {
    #[serde(default)]
    pub(crate) status: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "planned_end_date must be epoch milliseconds"))]
    pub(crate) planned_end_date: Option<i64>,
    #[serde(default)]
    pub(crate) description: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub(crate) name: Option<String>,
}
