use std::sync::OnceLock;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

use crate::core::config::Settings;

static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

pub(crate) const JOBS_RETURNED: &str = "jobservices_jobs_returned_total";
pub(crate) const JOB_PATCHES: &str = "jobservices_job_patches_total";

pub(crate) fn init(settings: &Settings) -> anyhow::Result<()> {
    if !settings.telemetry().prometheus_enabled {
        return Ok(());
    }

    let handle = PrometheusBuilder::new().install_recorder()?;
    metrics::describe_counter!(JOBS_RETURNED, "Jobs returned by list endpoints");
    metrics::describe_counter!(JOB_PATCHES, "PATCH requests applied to jobs");
    let _ = PROM_HANDLE.set(handle);
    Ok(())
}

pub(crate) fn render() -> Option<String> {
    PROM_HANDLE.get().map(|handle| handle.render())
}

pub(crate) fn record_jobs_returned(query: &'static str, count: usize) {
    metrics::counter!(JOBS_RETURNED, "query" => query).increment(count as u64);
}

pub(crate) fn record_job_patch(outcome: &'static str) {
    metrics::counter!(JOB_PATCHES, "outcome" => outcome).increment(1);
}
