use std::collections::HashMap;

use serde::Serialize;

pub(crate) mod job;
pub(crate) mod status_update;

#[derive(Debug, Serialize)]
pub(crate) struct HealthResponse {
    pub(crate) service: String,
    pub(crate) status: String,
    pub(crate) components: HashMap<String, String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RootResponse {
    pub(crate) service: String,
    pub(crate) version: String,
}
