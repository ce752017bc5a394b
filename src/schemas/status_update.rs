use serde::Serialize;
use time::PrimitiveDateTime;

use crate::core::time::millis_option;
use crate::db::models::StatusUpdate;

#[derive(Debug, Serialize)]
pub(crate) struct StatusUpdateResponse {
    /// The analysis id.
    pub(crate) id: String,
    /// Also called the invocation id.
    pub(crate) external_id: String,
    pub(crate) status: String,
    pub(crate) sent_from: String,
    pub(crate) sent_on: i64,
    pub(crate) propagated: bool,
    pub(crate) propagation_attempts: i64,
    pub(crate) last_propagation_attempt: Option<i64>,
    #[serde(with = "millis_option")]
    pub(crate) created_date: Option<PrimitiveDateTime>,
}

impl StatusUpdateResponse {
    pub(crate) fn from_db(update: StatusUpdate) -> Self {
        Self {
            id: update.id,
            external_id: update.external_id,
            status: update.status,
            sent_from: update.sent_from,
            sent_on: update.sent_on,
            propagated: update.propagated,
            propagation_attempts: update.propagation_attempts,
            last_propagation_attempt: update.last_propagation_attempt,
            created_date: update.created_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusUpdatesResponse {
    pub(crate) status_updates: Vec<StatusUpdateResponse>,
}
