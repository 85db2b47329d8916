use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::domain::VisaRules;
use crate::code::CountryCode;

/// Remote authority for visa categories between two countries.
#[async_trait]
pub trait VisaRulesSource: Send + Sync {
    async fn fetch(
        &self,
        passport: &CountryCode,
        destination: &CountryCode,
    ) -> Result<VisaRules, RulesSourceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RulesSourceError {
    /// Provider answered with anything other than 200, typically an unknown code.
    #[error("visa rules provider answered with status {0}")]
    Rejected(u16),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for RulesSourceError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value.to_string())
    }
}

/// Passport Visa API client addressed as `<base>/visa/<PASSPORT>/<DESTINATION>`.
#[derive(Debug, Clone)]
pub struct PassportVisaClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl PassportVisaClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            timeout,
        }
    }

    fn url_for(&self, passport: &CountryCode, destination: &CountryCode) -> String {
        format!("{}/visa/{}/{}", self.base_url, passport, destination)
    }
}

#[async_trait]
impl VisaRulesSource for PassportVisaClient {
    async fn fetch(
        &self,
        passport: &CountryCode,
        destination: &CountryCode,
    ) -> Result<VisaRules, RulesSourceError> {
        let url = self.url_for(passport, destination);
        debug!(%url, "requesting visa rules");

        let response = self.http.get(&url).timeout(self.timeout).send().await?;
        let status = response.status();
        debug!(status = status.as_u16(), "visa rules provider responded");
        if status != reqwest::StatusCode::OK {
            return Err(RulesSourceError::Rejected(status.as_u16()));
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
