//! Unit tests for Yahoo chart response decoding

use stonks::services::yahoo::messages::ChartResponse;
use stonks::services::YahooRestClient;

// 2024-01-02 .. 2024-01-05, 14:30 UTC (09:30 New York)
const CHART_JSON: &str = r#"{
  "chart": {
    "result": [{
      "meta": {"symbol": "AAPL", "currency": "USD", "gmtoffset": -18000},
      "timestamp": [1704205800, 1704292200, 1704378600, 1704465000, 1704472000],
      "indicators": {
        "quote": [{
          "close": [100.0, null, 102.0, 103.0, 104.0],
          "high":  [101.0, 102.0, 103.0, 104.0, 105.0],
          "low":   [99.0, 100.0, 101.0, 102.0, 103.0]
        }],
        "adjclose": [{"adjclose": [50.0, null, 102.0, 103.0, 104.0]}]
      }
    }],
    "error": null
  }
}"#;

#[test]
fn test_chart_into_bars() {
    let response: ChartResponse = serde_json::from_str(CHART_JSON).unwrap();
    let result = response.chart.result.unwrap().remove(0);
    assert_eq!(result.meta.symbol, "AAPL");

    let bars = result.into_bars();
    let dates: Vec<String> = bars.iter().map(|b| b.date.to_string()).collect();
    // null close skipped, the two 2024-01-05 rows collapse to the later one
    assert_eq!(dates, vec!["2024-01-02", "2024-01-04", "2024-01-05"]);

    // adjusted by adjclose / close
    assert_eq!(bars[0].close, 50.0);
    assert_eq!(bars[0].high, 50.5);
    assert_eq!(bars[0].low, 49.5);

    assert_eq!(bars[2].close, 104.0);
    assert_eq!(bars[2].high, 105.0);
}

#[test]
fn test_chart_error_not_found() {
    let json = r#"{"chart": {"result": null, "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}}}"#;
    let response: ChartResponse = serde_json::from_str(json).unwrap();
    let error = response.chart.error.unwrap();
    assert!(error.is_not_found());
    assert!(response.chart.result.is_none());
}

#[test]
fn test_chart_url() {
    let client = YahooRestClient::with_client("http://localhost:1234/", reqwest::Client::new());
    let url = client.chart_url("BRK-B", 100, 200).unwrap();
    assert_eq!(url.path(), "/v8/finance/chart/BRK-B");
    assert_eq!(
        url.query(),
        Some("period1=100&period2=200&interval=1d&events=div%2Csplits&includeAdjustedClose=true")
    );
}
