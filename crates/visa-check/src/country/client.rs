use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::{CountryDirectory, CountryMetadata, MetadataOrigin};
use crate::code::CountryCode;

/// Failure modes of a single registry request. Never surfaced past
/// [`CountryDirectory::fetch`].
#[derive(Debug, thiserror::Error)]
pub enum CountryLookupError {
    #[error("country registry request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("country registry answered with status {0}")]
    Status(u16),
    #[error("country registry payload could not be parsed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("country registry returned no entries")]
    Empty,
}

/// REST Countries style registry addressed as `<base>/alpha/<code>`.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl RestCountriesClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            timeout,
        }
    }

    fn url_for(&self, code: &CountryCode) -> String {
        format!("{}/alpha/{}", self.base_url, code.to_lowercase())
    }

    pub async fn try_fetch(&self, code: &CountryCode) -> Result<CountryMetadata, CountryLookupError> {
        let url = self.url_for(code);
        debug!(%url, "requesting country metadata");

        let response = self.http.get(&url).timeout(self.timeout).send().await?;
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            return Err(CountryLookupError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        let payload: RegistryPayload = serde_json::from_slice(&body)?;
        let entry = match payload {
            RegistryPayload::Many(entries) => entries.into_iter().next(),
            RegistryPayload::One(entry) => Some(entry),
        }
        .ok_or(CountryLookupError::Empty)?;

        Ok(entry.into_metadata(code))
    }
}

#[async_trait]
impl CountryDirectory for RestCountriesClient {
    async fn fetch(&self, code: &CountryCode) -> CountryMetadata {
        match self.try_fetch(code).await {
            Ok(metadata) => metadata,
            Err(error) => {
                warn!(country = %code, %error, "country metadata unavailable, using fallback");
                CountryMetadata::fallback(code)
            }
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RegistryPayload {
    Many(Vec<RegistryCountry>),
    One(RegistryCountry),
}

#[derive(Debug, Deserialize)]
struct RegistryCountry {
    #[serde(default)]
    name: Option<RegistryName>,
    #[serde(default)]
    capital: Option<Vec<String>>,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    currencies: Option<Map<String, Value>>,
    #[serde(default)]
    languages: Option<Map<String, Value>>,
    #[serde(default)]
    population: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RegistryName {
    #[serde(default)]
    common: Option<String>,
}

impl RegistryCountry {
    fn into_metadata(self, code: &CountryCode) -> CountryMetadata {
        let name = self
            .name
            .and_then(|name| name.common)
            .unwrap_or_else(|| code.as_str().to_string());
        let capital = self.capital.and_then(|capitals| capitals.into_iter().next());
        let currencies = self
            .currencies
            .map(|map| map.into_iter().map(|(code, _)| code).collect())
            .unwrap_or_default();
        let languages = self
            .languages
            .map(|map| {
                map.into_iter()
                    .filter_map(|(_, value)| value.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default();

        CountryMetadata {
            name,
            capital,
            region: self.region,
            currencies,
            languages,
            population: self.population,
            origin: MetadataOrigin::Registry,
        }
    }
}
