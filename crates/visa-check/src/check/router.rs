use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{debug, error};

use super::service::{VisaCheckError, VisaCheckService};
use super::views::CheckVisaRequest;
use crate::country::CountryDirectory;
use crate::visa::VisaRulesSource;

/// Router exposing the visa lookup endpoint.
pub fn visa_router<S, D>(service: Arc<VisaCheckService<S, D>>) -> Router
where
    S: VisaRulesSource + 'static,
    D: CountryDirectory + 'static,
{
    Router::new()
        .route("/api/check-visa", post(check_visa_handler::<S, D>))
        .with_state(service)
}

pub(crate) async fn check_visa_handler<S, D>(
    State(service): State<Arc<VisaCheckService<S, D>>>,
    payload: Result<Json<CheckVisaRequest>, JsonRejection>,
) -> Response
where
    S: VisaRulesSource + 'static,
    D: CountryDirectory + 'static,
{
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            return VisaCheckError::MalformedBody(rejection.body_text()).into_response();
        }
    };

    match service.check(request).await {
        Ok(answer) => Json(answer).into_response(),
        Err(err @ VisaCheckError::Internal(_)) => {
            error!(error = %err, "visa check failed");
            err.into_response()
        }
        Err(err) => {
            debug!(error = %err, "visa check rejected");
            err.into_response()
        }
    }
}
