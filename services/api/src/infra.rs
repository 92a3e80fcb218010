use campus_compass::config::AppConfig;
use campus_compass::error::AppError;
use campus_compass::workflows::catalog::CatalogSet;
use campus_compass::workflows::RecommendationService;
use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Loads the configured catalogs once and wraps them in the shared service.
pub(crate) fn load_service(config: &AppConfig) -> Result<Arc<RecommendationService>, AppError> {
    let catalogs = CatalogSet::load(&config.catalog)?;
    Ok(Arc::new(RecommendationService::new(Arc::new(catalogs))))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
