use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use reviewlens_classifier::LinearClassifier;
use reviewlens_core::config::TextConfig;
use reviewlens_core::errors::ScrapeError;
use reviewlens_core::models::{Prediction, ScrapedRow};
use reviewlens_core::traits::IReviewScraper;
use reviewlens_embeddings::EmbeddingTable;
use reviewlens_pipeline::{AnalyzeService, ModelBundle};
use reviewlens_scraper::StaticReviewScraper;
use reviewlens_server::{router, AppState};
use reviewlens_text::{PassthroughCorrector, TextNormalizer};
use serde_json::Value;
use tower::ServiceExt;

struct UnreachableShop;

impl IReviewScraper for UnreachableShop {
    fn scrape(&self, url: &str) -> Result<Vec<ScrapedRow>, ScrapeError> {
        Err(ScrapeError::FetchFailed {
            url: url.to_string(),
            reason: "connection refused".to_string(),
        })
    }

    fn name(&self) -> &str {
        "unreachable"
    }
}

fn app(scraper: Arc<dyn IReviewScraper>) -> axum::Router {
    let table = EmbeddingTable::from_entries(
        2,
        vec![
            ("robot".to_string(), vec![1.0, 0.0]),
            ("human".to_string(), vec![-1.0, 0.0]),
        ],
    )
    .unwrap();
    let classifier = LinearClassifier::new(vec![0.0, 0.0, 1.0, 0.0], 0.0).unwrap();
    let normalizer =
        TextNormalizer::with_spell_corrector(&TextConfig::default(), Box::new(PassthroughCorrector));
    let service = AnalyzeService::new(
        scraper,
        Arc::new(normalizer),
        Arc::new(ModelBundle::new(table, classifier).unwrap()),
        200,
    );
    router(AppState::new(service))
}

fn rows() -> Arc<dyn IReviewScraper> {
    Arc::new(StaticReviewScraper::new(vec![
        ScrapedRow::new("4.5", "Robot wrote this"),
        ScrapedRow::new("N/A", "A human did"),
    ]))
}

async fn post_analyze(app: axum::Router, body: &str) -> (StatusCode, Value) {
    let request = Request::post("/analyze")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test(flavor = "multi_thread")]
async fn analyze_returns_results_in_order() {
    let (status, body) = post_analyze(app(rows()), r#"{"url":"http://shop.test/p/1"}"#).await;
    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["Review"], "Robot wrote this");
    assert_eq!(results[0]["Rating"], 4.5);
    assert_eq!(results[0]["Prediction"], Prediction::Fake.label());
    assert_eq!(results[1]["Rating"], 3.0);
    assert_eq!(results[1]["Prediction"], Prediction::Real.label());
}

#[tokio::test(flavor = "multi_thread")]
async fn missing_url_is_bad_request() {
    for body in ["{}", r#"{"url":""}"#, "not json"] {
        let (status, json) = post_analyze(app(rows()), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(json["error"], "No URL provided");
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn fetch_failure_is_bad_gateway() {
    let (status, json) = post_analyze(app(Arc::new(UnreachableShop)), r#"{"url":"http://x"}"#).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"], "Failed to fetch reviews");
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_page_is_not_found() {
    let empty: Arc<dyn IReviewScraper> = Arc::new(StaticReviewScraper::new(Vec::new()));
    let (status, json) = post_analyze(app(empty), r#"{"url":"http://x"}"#).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "No reviews found");
}

#[tokio::test(flavor = "multi_thread")]
async fn health_reports_model_shape() {
    let response = app(rows())
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["vocab_size"], 2);
    assert_eq!(json["dimensions"], 2);
}

async fn get_text(app: axum::Router, path: &str) -> (StatusCode, String, String) {
    let response = app
        .oneshot(Request::get(path).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test(flavor = "multi_thread")]
async fn front_page_loads_its_script() {
    let (status, content_type, page) = get_text(app(rows()), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/html"));
    assert!(page.contains(r#"<script src="/static/script.js">"#));

    let (status, content_type, script) = get_text(app(rows()), "/static/script.js").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/javascript"));
    assert!(script.contains(r#"fetch("/analyze""#));
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_static_file_is_not_found() {
    let (status, _, _) = get_text(app(rows()), "/static/app.css").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
