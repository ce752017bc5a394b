pub(crate) mod health;
pub(crate) mod jobs;
pub(crate) mod status_updates;
