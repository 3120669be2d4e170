//! Integration tests for the Yahoo chart provider against a mocked API

use serde_json::{json, Value};
use std::sync::Arc;
use stonks::models::{Leaning, SignalState};
use stonks::services::{
    MarketDataError, MarketDataProvider, YahooMarketDataProvider, YahooRestClient,
};
use stonks::signals::{SignalEngine, SignalError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// 2024-01-02 14:30 UTC
const FIRST_SESSION: i64 = 1_704_205_800;

/// Chart payload with one daily bar per close, high/low one unit away.
fn chart_body(symbol: &str, closes: &[f64]) -> Value {
    let timestamps: Vec<i64> = (0..closes.len() as i64)
        .map(|i| FIRST_SESSION + i * 86_400)
        .collect();
    let highs: Vec<f64> = closes.iter().map(|c| c + 1.0).collect();
    let lows: Vec<f64> = closes.iter().map(|c| c - 1.0).collect();

    json!({
        "chart": {
            "result": [{
                "meta": {"symbol": symbol, "currency": "USD", "gmtoffset": -18000},
                "timestamp": timestamps,
                "indicators": {
                    "quote": [{"close": closes, "high": highs, "low": lows}],
                    "adjclose": [{"adjclose": closes}]
                }
            }],
            "error": null
        }
    })
}

fn provider(server: &MockServer) -> YahooMarketDataProvider {
    let client = YahooRestClient::with_client(server.uri(), reqwest::Client::new());
    YahooMarketDataProvider::with_client(Arc::new(client))
}

#[tokio::test]
async fn provider_fetches_daily_bars() {
    let server = MockServer::start().await;
    let closes: Vec<f64> = (0..5).map(|i| 100.0 + i as f64).collect();
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/AAPL"))
        .and(query_param("interval", "1d"))
        .and(query_param("includeAdjustedClose", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body("AAPL", &closes)))
        .expect(1)
        .mount(&server)
        .await;

    let series = provider(&server)
        .get_history("AAPL", chrono::Duration::days(62))
        .await
        .expect("history");

    assert_eq!(series.len(), 5);
    assert_eq!(series.closes(), closes);
    assert_eq!(series.bars()[0].date.to_string(), "2024-01-02");
    assert_eq!(series.last().unwrap().date.to_string(), "2024-01-06");
}

#[tokio::test]
async fn http_404_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/NOPE"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "chart": {"result": null, "error": {"code": "Not Found", "description": "No data found"}}
        })))
        .mount(&server)
        .await;

    let err = provider(&server)
        .get_history("NOPE", chrono::Duration::days(62))
        .await
        .unwrap_err();
    assert!(matches!(err, MarketDataError::NotFound(ref s) if s == "NOPE"));
}

#[tokio::test]
async fn chart_error_body_is_mapped() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/GONE"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": {"result": null, "error": {"code": "Not Found", "description": "delisted"}}
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/BAD"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "chart": {"result": null, "error": {"code": "Bad Request", "description": "Invalid input"}}
        })))
        .mount(&server)
        .await;

    let provider = provider(&server);
    let lookback = chrono::Duration::days(62);

    let err = provider.get_history("GONE", lookback).await.unwrap_err();
    assert!(matches!(err, MarketDataError::NotFound(_)));

    let err = provider.get_history("BAD", lookback).await.unwrap_err();
    assert!(matches!(err, MarketDataError::Request(ref msg) if msg == "Invalid input"));
}

#[tokio::test]
async fn server_error_is_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/MSFT"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let engine = SignalEngine::new(Arc::new(provider(&server)));
    let err = engine.get_report("MSFT").await.unwrap_err();
    assert!(matches!(err, SignalError::Provider(MarketDataError::Request(_))));
    assert_eq!(err.kind(), "provider_error");
}

#[tokio::test]
async fn engine_evaluates_yahoo_history() {
    let server = MockServer::start().await;
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64).collect();
    Mock::given(method("GET"))
        .and(path("/v8/finance/chart/AAPL"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chart_body("AAPL", &closes)))
        .mount(&server)
        .await;

    let engine = SignalEngine::new(Arc::new(provider(&server)));
    let report = engine.get_report("aapl").await.expect("report");

    assert_eq!(report.symbol, "AAPL");
    assert_eq!(report.last_close, 129.0);
    assert!((report.fast_stochastic.value - 18.0 / 19.0).abs() < 1e-9);
    assert_eq!(report.fast_stochastic.leaning, Leaning::Overbought);
    assert_eq!(report.percent_b.leaning, Leaning::Neutral);
    assert_eq!(report.overall, SignalState::Neither);
}
