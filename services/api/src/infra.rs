use metrics_exporter_prometheus::PrometheusHandle;
use realty_leads::config::IntakeConfig;
use realty_leads::error::AppError;
use realty_leads::intake::{IntakeService, JsonlFileSink};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Opens both submission logs and wires them into the intake service.
pub(crate) fn file_backed_intake(
    config: &IntakeConfig,
) -> Result<Arc<IntakeService<JsonlFileSink>>, AppError> {
    let leads = JsonlFileSink::open(&config.lead_log_path)?;
    let valuations = JsonlFileSink::open(&config.valuation_log_path)?;

    info!(
        lead_log = %leads.path().display(),
        valuation_log = %valuations.path().display(),
        "submission logs opened"
    );

    Ok(Arc::new(IntakeService::new(
        Arc::new(leads),
        Arc::new(valuations),
    )))
}
