use sentivol::Correlation;
use sentivol_mock::{DynamicMock, FixedScorer, MockBehavior};

use crate::helpers::{AAPL, APPLE, article, bar, config, d, read_csv, sentivol, today};

#[tokio::test]
async fn zero_low_propagates_infinite_volatility() {
    let dir = tempfile::tempdir().unwrap();
    let mock = DynamicMock::new();
    mock.set_news(
        APPLE,
        MockBehavior::Return(vec![
            article(APPLE, AAPL, "one", "2024-05-13T12:00:00Z"),
            article(APPLE, AAPL, "two", "2024-05-14T12:00:00Z"),
            article(APPLE, AAPL, "three", "2024-05-15T12:00:00Z"),
        ]),
    )
    .await;
    mock.set_prices(
        AAPL,
        MockBehavior::Return(vec![
            bar(AAPL, d(5, 13), 110.0, 0.0),
            bar(AAPL, d(5, 14), 110.0, 100.0),
            bar(AAPL, d(5, 15), 120.0, 100.0),
        ]),
    )
    .await;
    let scorer = FixedScorer::new()
        .with("one", 0.1)
        .with("two", 0.2)
        .with("three", 0.3);

    let report = sentivol(&mock, scorer, config(dir.path()))
        .run(today())
        .await
        .unwrap();

    assert_eq!(report.merged_rows, 3);
    let (_, rows) = read_csv(&report.csv_path.unwrap());
    assert_eq!(rows[0][1], "2024-05-13");
    assert_eq!(rows[0][4], "inf");
    match report.correlation {
        Some(Correlation::Computed(r)) => assert!(r.is_nan(), "r = {r}"),
        other => panic!("unexpected correlation {other:?}"),
    }
    let plot = report.plot_path.unwrap();
    assert!(plot.exists());
}
