use std::sync::Arc;

use tracing::{debug, info};

use super::cache::{CacheError, MemoCache};
use super::domain::VisaRules;
use super::source::{RulesSourceError, VisaRulesSource};
use crate::code::CountryCode;

/// Memoizing front for a [`VisaRulesSource`].
///
/// Only successful answers are cached; rejections and transport failures are
/// retried on the next call.
pub struct VisaQueryService<S> {
    source: Arc<S>,
    cache: Arc<MemoCache>,
}

impl<S> VisaQueryService<S>
where
    S: VisaRulesSource + 'static,
{
    pub fn new(source: Arc<S>, cache: Arc<MemoCache>) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &Arc<MemoCache> {
        &self.cache
    }

    pub async fn check(
        &self,
        passport: &CountryCode,
        destination: &CountryCode,
    ) -> Result<VisaRules, VisaQueryError> {
        let key = MemoCache::key(passport.as_str(), destination.as_str());
        if let Some(rules) = self.cache.get(passport, destination)? {
            debug!(%key, "visa rules cache hit");
            return Ok(rules);
        }
        debug!(%key, "visa rules cache miss");

        match self.source.fetch(passport, destination).await {
            Ok(rules) => {
                self.cache.insert(passport, destination, rules.clone())?;
                Ok(rules)
            }
            Err(RulesSourceError::Rejected(status)) => {
                info!(%passport, %destination, status, "visa rules provider rejected codes");
                Err(VisaQueryError::InvalidCodes)
            }
            Err(error) => {
                info!(%passport, %destination, %error, "visa rules lookup failed");
                Err(VisaQueryError::Fetch(error.to_string()))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VisaQueryError {
    #[error("Invalid country codes. Please use ISO 2-letter codes (e.g., US, JP)")]
    InvalidCodes,
    #[error("Error fetching data: {0}")]
    Fetch(String),
    #[error(transparent)]
    Cache(#[from] CacheError),
}
