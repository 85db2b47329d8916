use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;
use std::sync::Arc;
use visa_check::country::CountryDirectory;
use visa_check::error::AppError;
use visa_check::visa::VisaRulesSource;
use visa_check::{visa_router, VisaCheckService};

pub(crate) fn with_service_routes<S, D>(service: Arc<VisaCheckService<S, D>>) -> Router
where
    S: VisaRulesSource + 'static,
    D: CountryDirectory + 'static,
{
    visa_router(service)
        .route("/", get(index_page))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
}

/// Serves the bundled front-end page from the configured static directory.
pub(crate) async fn index_page(Extension(state): Extension<AppState>) -> Result<Response, AppError> {
    let path = state.static_dir.join("index.html");
    let body = tokio::fs::read(&path).await?;
    let mime = mime_guess::from_path(&path).first_or_octet_stream();

    Ok(([(header::CONTENT_TYPE, mime.to_string())], body).into_response())
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
