use std::sync::Arc;

use httpmock::prelude::*;
use sentivol::{Sentivol, SentivolError};
use sentivol_newsapi::NewsApiConnector;
use sentivol_yfinance::YfConnector;

use crate::helpers::{APPLE, config, today};

const APPLE_NEWS: &str = r#"{
  "status": "ok",
  "totalResults": 1,
  "articles": [{
    "source": {"id": null, "name": "Wire"},
    "title": "Apple shares rally after strong earnings",
    "url": "https://example.com/apple",
    "publishedAt": "2024-05-13T14:30:00Z"
  }]
}"#;

const RATE_LIMITED: &str =
    r#"{"status":"error","code":"rateLimited","message":"You have made too many requests"}"#;

// 2024-05-10 and 2024-05-13 opening bells in New York.
const AAPL_CHART: &str = r#"{
  "chart": {
    "result": [{
      "meta": {"symbol": "AAPL", "exchangeTimezoneName": "America/New_York", "gmtoffset": -14400},
      "timestamp": [1715347800, 1715607000],
      "indicators": {
        "quote": [{
          "open":   [182.0, 185.0],
          "high":   [185.0, 187.5],
          "low":    [181.0, 184.0],
          "close":  [183.0, 186.0],
          "volume": [5000000, 6000000]
        }],
        "adjclose": [{"adjclose": [182.8, 185.9]}]
      }
    }],
    "error": null
  }
}"#;

const NOT_FOUND: &str = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;

#[tokio::test]
async fn real_connectors_against_local_endpoints() {
    let server = MockServer::start_async().await;
    let apple = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/everything")
                .query_param("q", r#"("Apple" OR "AAPL") AND (stock OR market)"#)
                .query_param("from", "2024-05-12")
                .query_param("to", "2024-05-16")
                .query_param("apiKey", "secret");
            then.status(200)
                .header("content-type", "application/json")
                .body(APPLE_NEWS);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/everything")
                .query_param("q", r#"("Tesla" OR "TSLA") AND (stock OR market)"#);
            then.status(429)
                .header("content-type", "application/json")
                .body(RATE_LIMITED);
        })
        .await;
    let chart = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v8/finance/chart/AAPL")
                .query_param("interval", "1d");
            then.status(200)
                .header("content-type", "application/json")
                .body(AAPL_CHART);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/v8/finance/chart/TSLA");
            then.status(404).body(NOT_FOUND);
        })
        .await;

    let news = NewsApiConnector::builder()
        .api_key("secret")
        .base_url(server.base_url())
        .build()
        .unwrap();
    let prices = YfConnector::with_base_url(&server.base_url()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let sv = Sentivol::builder()
        .with_connector(Arc::new(news))
        .with_connector(Arc::new(prices))
        .config(config(dir.path()))
        .build()
        .unwrap();

    let report = sv.run(today()).await.unwrap();
    apple.assert_async().await;
    chart.assert_async().await;

    assert_eq!(report.articles, 1);
    assert!(report.news[0].is_ok());
    assert!(matches!(
        report.news[1].error,
        Some(SentivolError::Connector { ref msg, .. }) if msg.contains("429")
    ));
    assert_eq!(report.price_rows, 2);
    assert_eq!(report.merged_rows, 1);
    assert_eq!(report.warnings.len(), 2);
    assert!(
        report
            .warnings
            .iter()
            .any(|w| matches!(w, SentivolError::NotFound { .. }))
    );

    let (_, rows) = crate::helpers::read_csv(&report.csv_path.unwrap());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], APPLE);
    assert_eq!(rows[0][1], "2024-05-13");
    assert_eq!(rows[0][3], "2024-05-13");
    let score: f64 = rows[0][2].parse().unwrap();
    assert!((-1.0..=1.0).contains(&score));
    let vol: f64 = rows[0][4].parse().unwrap();
    assert!((vol - 3.5 / 184.0).abs() < 1e-12);
}
