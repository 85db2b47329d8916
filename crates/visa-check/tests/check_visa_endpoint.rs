use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use httpmock::prelude::*;
use serde_json::{json, Value};
use tower::ServiceExt;
use visa_check::country::RestCountriesClient;
use visa_check::visa::{MemoCache, PassportVisaClient, VisaQueryService};
use visa_check::{visa_router, VisaCheckService};

type LiveService = VisaCheckService<PassportVisaClient, RestCountriesClient>;

fn live_service(rules: &MockServer, registry: &MockServer, registry_timeout: Duration) -> Arc<LiveService> {
    let http = reqwest::Client::new();
    let query = VisaQueryService::new(
        Arc::new(PassportVisaClient::new(
            http.clone(),
            rules.base_url(),
            Duration::from_secs(10),
        )),
        Arc::new(MemoCache::new()),
    );
    let directory = RestCountriesClient::new(http, registry.base_url(), registry_timeout);
    Arc::new(VisaCheckService::new(query, Arc::new(directory)))
}

async fn post_check(service: Arc<LiveService>, passport: &str, destination: &str) -> (StatusCode, Value) {
    let body = json!({ "passport": passport, "destination": destination });
    let response = visa_router(service)
        .oneshot(
            Request::post("/api/check-visa")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    (status, serde_json::from_slice(&bytes).expect("json payload"))
}

fn us_to_japan(status: &str) -> Value {
    json!({
        "passport": { "code": "US", "name": "United States" },
        "destination": { "code": "JP", "name": "Japan" },
        "category": { "code": "VOA", "name": status },
        "dur": 30,
        "last_updated": "2025-03-01T12:00:00Z"
    })
}

#[tokio::test]
async fn registry_timeout_still_answers_with_provider_data() {
    let rules = MockServer::start_async().await;
    let registry = MockServer::start_async().await;
    rules
        .mock_async(|when, then| {
            when.method(GET).path("/visa/US/JP");
            then.status(200).json_body(us_to_japan("Visa on Arrival"));
        })
        .await;
    registry
        .mock_async(|when, then| {
            when.method(GET).path("/alpha/jp");
            then.status(200)
                .delay(Duration::from_millis(800))
                .json_body(json!([{ "name": { "common": "Japan" } }]));
        })
        .await;

    let service = live_service(&rules, &registry, Duration::from_millis(100));
    let (status, body) = post_check(service, "US", "JP").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["destination"]["name"], "Japan");
    assert_eq!(body["destination"]["capital"], "N/A");
    assert_eq!(body["destination"]["region"], "N/A");
    assert_eq!(body["destination"]["population"], "N/A");
    assert_eq!(body["visa"]["type"], "Tourist/Visitor (On Arrival)");
    assert_eq!(body["visa"]["documents"].as_array().map(Vec::len), Some(6));
    assert_eq!(body["visa"]["stay_duration"], 30);
}

#[tokio::test]
async fn full_registry_answer_is_formatted() {
    let rules = MockServer::start_async().await;
    let registry = MockServer::start_async().await;
    rules
        .mock_async(|when, then| {
            when.method(GET).path("/visa/US/CH");
            then.status(200).json_body(json!({
                "passport": { "code": "US", "name": "United States" },
                "destination": { "code": "CH", "name": "Switzerland" },
                "category": { "code": "VF", "name": "Visa Free" },
                "dur": 90,
                "last_updated": "2025-03-01"
            }));
        })
        .await;
    registry
        .mock_async(|when, then| {
            when.method(GET).path("/alpha/ch");
            then.status(200).json_body(json!([{
                "name": { "common": "Switzerland" },
                "capital": ["Bern"],
                "region": "Europe",
                "currencies": { "CHF": { "name": "Swiss franc" } },
                "languages": { "fra": "French", "gsw": "Swiss German", "ita": "Italian", "roh": "Romansh" },
                "population": 50000000u64
            }]));
        })
        .await;

    let service = live_service(&rules, &registry, Duration::from_secs(5));
    let (status, body) = post_check(service, "us", "ch").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["destination"],
        json!({
            "name": "Switzerland",
            "code": "CH",
            "capital": "Bern",
            "region": "Europe",
            "currency": "CHF",
            "language": "French, Swiss German, Italian, Romansh",
            "population": "50,000,000"
        })
    );
    assert_eq!(body["visa"]["type"], "Tourist/Visitor");
}

#[tokio::test]
async fn repeated_lookups_hit_rules_provider_once() {
    let rules = MockServer::start_async().await;
    let registry = MockServer::start_async().await;
    let rules_mock = rules
        .mock_async(|when, then| {
            when.method(GET).path("/visa/US/JP");
            then.status(200).json_body(us_to_japan("Visa Free"));
        })
        .await;
    let registry_mock = registry
        .mock_async(|when, then| {
            when.method(GET).path("/alpha/jp");
            then.status(200).json_body(json!({ "name": { "common": "Japan" } }));
        })
        .await;

    let service = live_service(&rules, &registry, Duration::from_secs(5));
    for _ in 0..2 {
        let (status, _) = post_check(service.clone(), "US", "JP").await;
        assert_eq!(status, StatusCode::OK);
    }

    rules_mock.assert_hits_async(1).await;
    registry_mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn provider_rejection_is_retried_on_next_request() {
    let rules = MockServer::start_async().await;
    let registry = MockServer::start_async().await;
    let rules_mock = rules
        .mock_async(|when, then| {
            when.method(GET).path("/visa/US/XX");
            then.status(400).json_body(json!({ "error": "invalid" }));
        })
        .await;

    let service = live_service(&rules, &registry, Duration::from_secs(5));
    for _ in 0..2 {
        let (status, body) = post_check(service.clone(), "US", "XX").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body,
            json!({ "error": "Invalid country codes. Please use ISO 2-letter codes (e.g., US, JP)" })
        );
    }

    rules_mock.assert_hits_async(2).await;
}

#[tokio::test]
async fn unreachable_provider_reports_fetch_error() {
    let registry = MockServer::start_async().await;
    let http = reqwest::Client::new();
    let query = VisaQueryService::new(
        Arc::new(PassportVisaClient::new(
            http.clone(),
            "http://127.0.0.1:9",
            Duration::from_millis(500),
        )),
        Arc::new(MemoCache::new()),
    );
    let directory = RestCountriesClient::new(http, registry.base_url(), Duration::from_secs(5));
    let service = Arc::new(VisaCheckService::new(query, Arc::new(directory)));

    let (status, body) = post_check(service, "US", "JP").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap_or_default()
        .starts_with("Error fetching data: "));
}
