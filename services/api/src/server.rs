use crate::cli::ServeArgs;
use crate::infra::{file_backed_intake, AppState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use realty_leads::catalogue::PropertyCatalogue;
use realty_leads::config::AppConfig;
use realty_leads::error::AppError;
use realty_leads::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(path) = args.lead_log.take() {
        config.intake.lead_log_path = path;
    }
    if let Some(path) = args.valuation_log.take() {
        config.intake.valuation_log_path = path;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let intake = file_backed_intake(&config.intake)?;
    let catalogue = Arc::new(PropertyCatalogue::seeded());
    info!(listings = catalogue.len(), "property catalogue loaded");

    let app = with_service_routes(intake, catalogue)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "lead intake service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
