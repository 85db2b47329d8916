use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::debug;

use super::views::{CheckVisaRequest, VisaCheckResponse};
use crate::catalog;
use crate::code::CountryCode;
use crate::country::CountryDirectory;
use crate::visa::{VisaQueryError, VisaQueryService, VisaRulesSource};

/// Orchestrates one visa answer: rules lookup, destination metadata, and the
/// document checklist.
pub struct VisaCheckService<S, D> {
    rules: VisaQueryService<S>,
    directory: Arc<D>,
}

impl<S, D> VisaCheckService<S, D>
where
    S: VisaRulesSource + 'static,
    D: CountryDirectory + 'static,
{
    pub fn new(rules: VisaQueryService<S>, directory: Arc<D>) -> Self {
        Self { rules, directory }
    }

    pub fn rules(&self) -> &VisaQueryService<S> {
        &self.rules
    }

    pub async fn check(
        &self,
        request: CheckVisaRequest,
    ) -> Result<VisaCheckResponse, VisaCheckError> {
        let (passport, destination) = validate(&request)?;
        if !passport.looks_like_alpha2() || !destination.looks_like_alpha2() {
            debug!(%passport, %destination, "codes are not ISO alpha-2 shaped, deferring to provider");
        }

        let rules = self.rules.check(&passport, &destination).await?;
        let metadata = self.directory.fetch(&destination).await;
        let requirement = catalog::lookup(rules.status_label());

        Ok(VisaCheckResponse::assemble(
            &passport,
            &destination,
            &rules,
            &metadata,
            requirement,
        ))
    }
}

/// Normalizes both codes and rejects empty or identical pairs.
pub fn validate(request: &CheckVisaRequest) -> Result<(CountryCode, CountryCode), VisaCheckError> {
    let passport = CountryCode::new(request.passport.as_deref().unwrap_or_default());
    let destination = CountryCode::new(request.destination.as_deref().unwrap_or_default());

    if passport.is_empty() || destination.is_empty() {
        return Err(VisaCheckError::MissingCodes);
    }
    if passport == destination {
        return Err(VisaCheckError::SameCountry);
    }
    Ok((passport, destination))
}

#[derive(Debug, thiserror::Error)]
pub enum VisaCheckError {
    #[error("Passport and destination codes are required")]
    MissingCodes,
    #[error("Passport and destination countries must be different")]
    SameCountry,
    #[error("{0}")]
    MalformedBody(String),
    #[error(transparent)]
    Upstream(VisaQueryError),
    #[error("{0}")]
    Internal(String),
}

impl VisaCheckError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            VisaCheckError::MissingCodes
            | VisaCheckError::SameCountry
            | VisaCheckError::MalformedBody(_)
            | VisaCheckError::Upstream(_) => StatusCode::BAD_REQUEST,
            VisaCheckError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<VisaQueryError> for VisaCheckError {
    fn from(value: VisaQueryError) -> Self {
        match value {
            VisaQueryError::Cache(err) => Self::Internal(err.to_string()),
            other => Self::Upstream(other),
        }
    }
}

impl IntoResponse for VisaCheckError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
