use sentivol::SentivolError;
use sentivol_mock::{DynamicMock, FixedScorer, MockBehavior};

use crate::helpers::{AAPL, APPLE, TESLA, TSLA, article, bar, config, d, sentivol, today};

#[tokio::test]
async fn failing_company_is_skipped_and_reported() {
    let dir = tempfile::tempdir().unwrap();
    let mock = DynamicMock::new();
    mock.set_news(
        APPLE,
        MockBehavior::Fail(SentivolError::connector("newsapi", "HTTP 429: rateLimited")),
    )
    .await;
    mock.set_news(
        TESLA,
        MockBehavior::Return(vec![article(TESLA, TSLA, "t", "2024-05-13T10:00:00Z")]),
    )
    .await;
    mock.set_prices(AAPL, MockBehavior::Return(vec![bar(AAPL, d(5, 13), 101.0, 100.0)]))
        .await;
    mock.set_prices(TSLA, MockBehavior::Return(vec![bar(TSLA, d(5, 13), 210.0, 200.0)]))
        .await;

    let report = sentivol(&mock, FixedScorer::new(), config(dir.path()))
        .run(today())
        .await
        .unwrap();

    assert_eq!(report.news.len(), 2);
    assert_eq!(report.news[0].company, APPLE);
    assert_eq!(report.news[0].articles, 0);
    assert!(!report.news[0].is_ok());
    assert!(report.news[1].is_ok());
    assert_eq!(report.news[1].articles, 1);
    assert_eq!(
        report.warnings,
        vec![SentivolError::connector("newsapi", "HTTP 429: rateLimited")]
    );
    assert_eq!(report.merged_rows, 1);
}

#[tokio::test]
async fn untagged_provider_errors_are_attributed_to_the_connector() {
    let dir = tempfile::tempdir().unwrap();
    let mock = DynamicMock::new();
    mock.set_news(APPLE, MockBehavior::Fail(SentivolError::Data("bad body".into())))
        .await;
    mock.set_news(
        TESLA,
        MockBehavior::Return(vec![article(TESLA, TSLA, "t", "2024-05-13T10:00:00Z")]),
    )
    .await;

    let news = sentivol(&mock, FixedScorer::new(), config(dir.path()))
        .fetch_news(config(dir.path()).window(today()).unwrap())
        .await
        .unwrap();
    match news.outcomes[0].error.as_ref() {
        Some(SentivolError::Connector { connector, msg }) => {
            assert_eq!(connector, DynamicMock::NAME);
            assert!(msg.contains("bad body"));
        }
        other => panic!("unexpected outcome {other:?}"),
    }
}

#[tokio::test]
async fn no_articles_anywhere_aborts_before_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("artifacts");
    let mock = DynamicMock::new();
    mock.set_news(APPLE, MockBehavior::Return(vec![])).await;
    mock.set_news(
        TESLA,
        MockBehavior::Fail(SentivolError::connector("newsapi", "down")),
    )
    .await;

    let err = sentivol(&mock, FixedScorer::new(), config(&out))
        .run(today())
        .await
        .unwrap_err();
    assert_eq!(err, SentivolError::NoArticles);
    assert!(err.is_fatal());
    assert!(!out.exists());
    // Prices are never requested once news came back empty.
    assert!(mock.price_requests().await.is_empty());
}

#[tokio::test]
async fn undated_articles_count_as_fetched_but_are_not_scored() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("artifacts");
    let mock = DynamicMock::new();
    let mut undated = article(APPLE, AAPL, "no date", "2024-05-13T10:00:00Z");
    undated.published_at = None;
    mock.set_news(APPLE, MockBehavior::Return(vec![undated])).await;
    mock.set_prices(AAPL, MockBehavior::Return(vec![bar(AAPL, d(5, 13), 101.0, 100.0)]))
        .await;

    let report = sentivol(&mock, FixedScorer::new(), config(&out))
        .run(today())
        .await
        .unwrap();
    assert_eq!(report.articles, 1);
    assert_eq!(report.daily_sentiment_rows, 0);
    assert_eq!(report.merged_rows, 0);
    assert!(report.csv_path.is_none());
    assert!(!out.exists());
}

#[tokio::test]
async fn fatal_provider_error_aborts_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("artifacts");
    let mock = DynamicMock::new();
    let rejected = SentivolError::InvalidArg("query too long".into());
    mock.set_news(APPLE, MockBehavior::Fail(rejected.clone())).await;
    mock.set_news(
        TESLA,
        MockBehavior::Return(vec![article(TESLA, TSLA, "t", "2024-05-13T10:00:00Z")]),
    )
    .await;

    let err = sentivol(&mock, FixedScorer::new(), config(&out))
        .run(today())
        .await
        .unwrap_err();
    assert_eq!(err, rejected);
    // The loop stops at the first fatal failure.
    assert_eq!(mock.news_requests().await.len(), 1);
    assert!(!out.exists());
}
