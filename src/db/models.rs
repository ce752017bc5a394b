use sqlx::FromRow;
use time::PrimitiveDateTime;

#[derive(Debug, Clone, FromRow)]
pub(crate) struct Job {
    pub(crate) id: String,
    pub(crate) app_id: String,
    pub(crate) user_id: String,
    pub(crate) username: String,
    pub(crate) status: String,
    pub(crate) description: String,
    pub(crate) name: String,
    pub(crate) result_folder: String,
    pub(crate) start_date: Option<PrimitiveDateTime>,
    pub(crate) planned_end_date: Option<PrimitiveDateTime>,
}

/// One propagation record for a step of an analysis.
#[derive(Debug, Clone, FromRow)]
pub(crate) struct StatusUpdate {
    pub(crate) id: String,
    pub(crate) external_id: String,
    pub(crate) status: String,
    pub(crate) sent_from: String,
    pub(crate) sent_on: i64,
    pub(crate) propagated: bool,
    pub(crate) propagation_attempts: i64,
    pub(crate) last_propagation_attempt: Option<i64>,
    pub(crate) created_date: Option<PrimitiveDateTime>,
}
