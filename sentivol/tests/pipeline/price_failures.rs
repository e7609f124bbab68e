use sentivol::SentivolError;
use sentivol_mock::{DynamicMock, FixedScorer, MockBehavior};

use crate::helpers::{AAPL, APPLE, TESLA, TSLA, article, config, sentivol, today};

async fn with_news(mock: &DynamicMock) {
    mock.set_news(
        APPLE,
        MockBehavior::Return(vec![article(APPLE, AAPL, "a", "2024-05-13T10:00:00Z")]),
    )
    .await;
    mock.set_news(
        TESLA,
        MockBehavior::Return(vec![article(TESLA, TSLA, "t", "2024-05-14T10:00:00Z")]),
    )
    .await;
}

#[tokio::test]
async fn failed_price_call_degrades_to_an_empty_merge() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("artifacts");
    let mock = DynamicMock::new();
    with_news(&mock).await;
    mock.set_price_call(MockBehavior::Fail(SentivolError::connector(
        "yahoo",
        "HTTP 503",
    )))
    .await;

    let report = sentivol(&mock, FixedScorer::new(), config(&out))
        .run(today())
        .await
        .unwrap();

    assert_eq!(report.articles, 2);
    assert_eq!(report.daily_sentiment_rows, 2);
    assert_eq!(report.price_rows, 0);
    assert_eq!(report.trading_days, 0);
    assert_eq!(report.merged_rows, 0);
    assert_eq!(report.correlation, None);
    assert_eq!(report.csv_path, None);
    assert_eq!(report.plot_path, None);
    assert_eq!(
        report.warnings,
        vec![SentivolError::connector("yahoo", "HTTP 503")]
    );
    assert!(!out.exists());
}

#[tokio::test]
async fn every_unknown_ticker_becomes_a_warning() {
    let dir = tempfile::tempdir().unwrap();
    let mock = DynamicMock::new();
    with_news(&mock).await;

    let report = sentivol(&mock, FixedScorer::new(), config(dir.path()))
        .run(today())
        .await
        .unwrap();

    assert_eq!(report.merged_rows, 0);
    assert_eq!(
        report.warnings,
        vec![
            SentivolError::not_found("price history for AAPL"),
            SentivolError::not_found("price history for TSLA"),
        ]
    );
}

#[tokio::test]
async fn fatal_price_error_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("artifacts");
    let mock = DynamicMock::new();
    with_news(&mock).await;
    let rejected = SentivolError::InvalidArg("range too wide".into());
    mock.set_price_call(MockBehavior::Fail(rejected.clone())).await;

    let err = sentivol(&mock, FixedScorer::new(), config(&out))
        .run(today())
        .await
        .unwrap_err();
    assert_eq!(err, rejected);
    assert!(!out.exists());
}
