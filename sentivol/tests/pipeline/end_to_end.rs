use sentivol::Correlation;
use sentivol_mock::{DynamicMock, FixedScorer, MockBehavior};

use crate::helpers::{AAPL, APPLE, TESLA, TSLA, article, bar, config, d, read_csv, sentivol, today};

#[tokio::test]
async fn two_companies_merge_only_alignable_rows() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");
    let mock = DynamicMock::new();
    mock.set_news(
        APPLE,
        MockBehavior::Return(vec![
            // Sunday: aligns to Monday 05-13
            article(APPLE, AAPL, "apple up", "2024-05-12T15:00:00Z"),
            article(APPLE, AAPL, "apple down", "2024-05-14T09:00:00Z"),
        ]),
    )
    .await;
    mock.set_news(
        TESLA,
        MockBehavior::Return(vec![
            // 05-14 is a trading day (AAPL traded) but TSLA has no bar that day
            article(TESLA, TSLA, "tesla up", "2024-05-14T12:00:00Z"),
            // after the last known trading day
            article(TESLA, TSLA, "tesla crash", "2024-05-17T12:00:00Z"),
        ]),
    )
    .await;
    mock.set_prices(
        AAPL,
        MockBehavior::Return(vec![
            bar(AAPL, d(5, 13), 110.0, 100.0),
            bar(AAPL, d(5, 14), 105.0, 100.0),
            bar(AAPL, d(5, 16), 120.0, 100.0),
        ]),
    )
    .await;
    mock.set_prices(
        TSLA,
        MockBehavior::Return(vec![
            bar(TSLA, d(5, 13), 220.0, 200.0),
            bar(TSLA, d(5, 15), 230.0, 200.0),
            bar(TSLA, d(5, 16), 210.0, 200.0),
        ]),
    )
    .await;
    let scorer = FixedScorer::new()
        .with("apple up", 0.6)
        .with("apple down", -0.2)
        .with("tesla up", 0.4)
        .with("tesla crash", -0.8);

    let sv = sentivol(&mock, scorer, config(&out));
    let report = sv.run(today()).await.unwrap();

    assert_eq!(report.window.start, d(5, 12));
    assert_eq!(report.window.end, d(5, 16));
    assert_eq!(report.articles, 4);
    assert_eq!(report.daily_sentiment_rows, 4);
    assert_eq!(report.price_rows, 6);
    assert_eq!(report.trading_days, 4);
    assert_eq!(report.merged_rows, 2);
    assert_eq!(report.correlation, Some(Correlation::Skipped { rows: 2 }));
    assert!(report.warnings.is_empty());

    let csv_path = report.csv_path.clone().unwrap();
    assert_eq!(csv_path, out.join("final_analysis_data.csv"));
    let (header, rows) = read_csv(&csv_path);
    assert_eq!(
        header,
        vec![
            "company",
            "date",
            "sentiment_score",
            "trading_date",
            "volatility_on_trading_date"
        ]
    );
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][..2], &["Apple".to_string(), "2024-05-12".to_string()]);
    assert_eq!(rows[0][3], "2024-05-13");
    assert!((rows[0][2].parse::<f64>().unwrap() - 0.6).abs() < 1e-12);
    assert!((rows[0][4].parse::<f64>().unwrap() - 0.1).abs() < 1e-12);
    assert_eq!(&rows[1][..2], &["Apple".to_string(), "2024-05-14".to_string()]);
    assert_eq!(rows[1][3], "2024-05-14");
    assert!((rows[1][2].parse::<f64>().unwrap() + 0.2).abs() < 1e-12);
    assert!((rows[1][4].parse::<f64>().unwrap() - 0.05).abs() < 1e-12);

    // Fewer than three rows still produce a plot.
    let plot = report.plot_path.unwrap();
    assert_eq!(plot, out.join("sentiment_vs_volatility.svg"));
    let svg = std::fs::read_to_string(plot).unwrap();
    assert!(svg.contains("<svg"));
}

#[tokio::test]
async fn daily_sentiment_is_the_mean_of_same_day_headlines() {
    let dir = tempfile::tempdir().unwrap();
    let mock = DynamicMock::new();
    mock.set_news(
        APPLE,
        MockBehavior::Return(vec![
            article(APPLE, AAPL, "a", "2024-05-13T01:00:00Z"),
            article(APPLE, AAPL, "b", "2024-05-13T22:00:00Z"),
            article(APPLE, AAPL, "c", "2024-05-13T23:59:59Z"),
        ]),
    )
    .await;
    mock.set_prices(AAPL, MockBehavior::Return(vec![bar(AAPL, d(5, 13), 110.0, 100.0)]))
        .await;
    let scorer = FixedScorer::new().with("a", 0.9).with("b", -0.3).with("c", 0.3);

    let sv = sentivol(&mock, scorer, config(dir.path()));
    let report = sv.run(today()).await.unwrap();
    assert_eq!(report.daily_sentiment_rows, 1);
    let (_, rows) = read_csv(&report.csv_path.unwrap());
    assert_eq!(rows.len(), 1);
    assert!((rows[0][2].parse::<f64>().unwrap() - 0.3).abs() < 1e-12);
}
