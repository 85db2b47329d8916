//! Display metadata for the destination country.
//!
//! Lookups never fail from the caller's point of view: any registry problem
//! yields [`CountryMetadata::fallback`]. Results are not memoized.

mod client;

pub use client::{CountryLookupError, RestCountriesClient};

use async_trait::async_trait;

use crate::code::CountryCode;

/// Where a metadata record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataOrigin {
    Registry,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryMetadata {
    pub name: String,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub currencies: Vec<String>,
    pub languages: Vec<String>,
    pub population: Option<u64>,
    pub origin: MetadataOrigin,
}

impl CountryMetadata {
    /// Name-only record used when the registry cannot be reached or parsed.
    pub fn fallback(code: &CountryCode) -> Self {
        Self {
            name: code.as_str().to_string(),
            capital: None,
            region: None,
            currencies: Vec::new(),
            languages: Vec::new(),
            population: None,
            origin: MetadataOrigin::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == MetadataOrigin::Fallback
    }
}

/// Source of destination metadata. Implementations absorb their own failures.
#[async_trait]
pub trait CountryDirectory: Send + Sync {
    async fn fetch(&self, code: &CountryCode) -> CountryMetadata;
}
