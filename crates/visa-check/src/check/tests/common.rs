use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::check::VisaCheckService;
use crate::code::CountryCode;
use crate::country::{CountryDirectory, CountryMetadata, MetadataOrigin};
use crate::visa::{
    CountryRef, MemoCache, RulesSourceError, StayDuration, VisaCategory, VisaQueryService,
    VisaRules, VisaRulesSource,
};

/// Rules provider double keyed by `PASSPORT_DESTINATION`; unknown pairs are rejected.
#[derive(Default)]
pub(super) struct FakeRules {
    answers: Mutex<HashMap<(String, String), VisaRules>>,
    calls: AtomicUsize,
}

impl FakeRules {
    pub(super) fn with(self, passport: &str, destination: &str, rules: VisaRules) -> Self {
        self.answers
            .lock()
            .expect("rules mutex poisoned")
            .insert((passport.to_string(), destination.to_string()), rules);
        self
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VisaRulesSource for FakeRules {
    async fn fetch(
        &self,
        passport: &CountryCode,
        destination: &CountryCode,
    ) -> Result<VisaRules, RulesSourceError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .lock()
            .expect("rules mutex poisoned")
            .get(&(passport.to_string(), destination.to_string()))
            .cloned()
            .ok_or(RulesSourceError::Rejected(404))
    }
}

/// Registry double: known codes resolve, everything else degrades like a timeout.
#[derive(Default)]
pub(super) struct FakeDirectory {
    known: HashMap<String, CountryMetadata>,
    calls: AtomicUsize,
}

impl FakeDirectory {
    pub(super) fn with(mut self, code: &str, metadata: CountryMetadata) -> Self {
        self.known.insert(code.to_string(), metadata);
        self
    }

    pub(super) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CountryDirectory for FakeDirectory {
    async fn fetch(&self, code: &CountryCode) -> CountryMetadata {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.known
            .get(code.as_str())
            .cloned()
            .unwrap_or_else(|| CountryMetadata::fallback(code))
    }
}

pub(super) type TestService = VisaCheckService<FakeRules, FakeDirectory>;

pub(super) fn build_service(
    rules: FakeRules,
    directory: FakeDirectory,
) -> (Arc<TestService>, Arc<FakeRules>, Arc<FakeDirectory>) {
    let rules = Arc::new(rules);
    let directory = Arc::new(directory);
    let query = VisaQueryService::new(rules.clone(), Arc::new(MemoCache::new()));
    let service = Arc::new(VisaCheckService::new(query, directory.clone()));
    (service, rules, directory)
}

pub(super) fn rules(passport: (&str, &str), destination: (&str, &str), status: &str) -> VisaRules {
    VisaRules {
        passport: Some(CountryRef {
            code: Some(passport.0.to_string()),
            name: Some(passport.1.to_string()),
        }),
        destination: Some(CountryRef {
            code: Some(destination.0.to_string()),
            name: Some(destination.1.to_string()),
        }),
        category: Some(VisaCategory {
            code: None,
            name: Some(status.to_string()),
        }),
        dur: Some(StayDuration::Days(30)),
        last_updated: Some("2025-02-01".to_string()),
    }
}

pub(super) fn japan_metadata() -> CountryMetadata {
    CountryMetadata {
        name: "Japan".to_string(),
        capital: Some("Tokyo".to_string()),
        region: Some("Asia".to_string()),
        currencies: vec!["JPY".to_string()],
        languages: vec!["Japanese".to_string()],
        population: Some(125_836_021),
        origin: MetadataOrigin::Registry,
    }
}

pub(super) fn us_to_japan_rules(status: &str) -> FakeRules {
    FakeRules::default().with(
        "US",
        "JP",
        rules(("US", "United States"), ("JP", "Japan (provider)"), status),
    )
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
