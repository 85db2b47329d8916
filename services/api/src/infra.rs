use metrics_exporter_prometheus::PrometheusHandle;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use visa_check::config::UpstreamConfig;
use visa_check::country::RestCountriesClient;
use visa_check::error::AppError;
use visa_check::visa::{MemoCache, PassportVisaClient, VisaQueryService};
use visa_check::VisaCheckService;

pub(crate) type LiveVisaCheckService = VisaCheckService<PassportVisaClient, RestCountriesClient>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) static_dir: Arc<PathBuf>,
}

/// Wires the live HTTP clients and a fresh memo cache into the lookup service.
pub(crate) fn build_visa_service(
    upstream: &UpstreamConfig,
) -> Result<Arc<LiveVisaCheckService>, AppError> {
    let http = reqwest::Client::builder()
        .user_agent(concat!("visa-check/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let rules = PassportVisaClient::new(
        http.clone(),
        upstream.visa_rules.base_url.clone(),
        upstream.visa_rules.timeout,
    );
    let directory = RestCountriesClient::new(
        http,
        upstream.country_registry.base_url.clone(),
        upstream.country_registry.timeout,
    );

    let query = VisaQueryService::new(Arc::new(rules), Arc::new(MemoCache::new()));
    Ok(Arc::new(VisaCheckService::new(query, Arc::new(directory))))
}
