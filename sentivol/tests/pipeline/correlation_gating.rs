use sentivol::{Correlation, SentivolConfig};
use sentivol_mock::{DynamicMock, FixedScorer, MockBehavior};

use crate::helpers::{AAPL, APPLE, article, bar, config, d, sentivol, today};

async fn three_apple_days(mock: &DynamicMock, highs: [f64; 3]) {
    mock.set_news(
        APPLE,
        MockBehavior::Return(vec![
            article(APPLE, AAPL, "mild", "2024-05-13T12:00:00Z"),
            article(APPLE, AAPL, "good", "2024-05-14T12:00:00Z"),
            article(APPLE, AAPL, "great", "2024-05-15T12:00:00Z"),
        ]),
    )
    .await;
    mock.set_prices(
        AAPL,
        MockBehavior::Return(vec![
            bar(AAPL, d(5, 13), highs[0], 100.0),
            bar(AAPL, d(5, 14), highs[1], 100.0),
            bar(AAPL, d(5, 15), highs[2], 100.0),
        ]),
    )
    .await;
}

fn scorer() -> FixedScorer {
    FixedScorer::new()
        .with("mild", 0.1)
        .with("good", 0.2)
        .with("great", 0.3)
}

#[tokio::test]
async fn three_rows_compute_pearson() {
    let dir = tempfile::tempdir().unwrap();
    let mock = DynamicMock::new();
    three_apple_days(&mock, [101.0, 102.0, 103.0]).await;

    let report = sentivol(&mock, scorer(), config(dir.path()))
        .run(today())
        .await
        .unwrap();
    assert_eq!(report.merged_rows, 3);
    let r = report.correlation.and_then(Correlation::value).unwrap();
    assert!((r - 1.0).abs() < 1e-9, "r = {r}");
}

#[tokio::test]
async fn constant_volatility_yields_undefined_coefficient() {
    let dir = tempfile::tempdir().unwrap();
    let mock = DynamicMock::new();
    three_apple_days(&mock, [102.0, 102.0, 102.0]).await;

    let report = sentivol(&mock, scorer(), config(dir.path()))
        .run(today())
        .await
        .unwrap();
    let r = report.correlation.and_then(Correlation::value).unwrap();
    assert!(r.is_nan());
    assert!(report.plot_path.is_some());
}

#[tokio::test]
async fn plotting_can_be_disabled() {
    let dir = tempfile::tempdir().unwrap();
    let mock = DynamicMock::new();
    three_apple_days(&mock, [101.0, 102.0, 103.0]).await;
    let cfg = SentivolConfig {
        plot: false,
        ..config(dir.path())
    };

    let report = sentivol(&mock, scorer(), cfg.clone()).run(today()).await.unwrap();
    assert!(report.csv_path.is_some());
    assert!(report.plot_path.is_none());
    assert!(!cfg.plot_path().exists());
}
