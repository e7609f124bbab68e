use std::sync::Arc;

use sentivol::{CompanyTicker, Sentivol, SentivolConfig, SentivolError};
use sentivol_mock::{DynamicMock, MockConnector};
use sentivol_newsapi::NewsApiConnector;

fn assert_invalid(res: Result<Sentivol, SentivolError>, needle: &str) {
    match res {
        Err(SentivolError::InvalidArg(msg)) => assert!(msg.contains(needle), "{msg}"),
        Err(e) => panic!("unexpected error {e:?}"),
        Ok(_) => panic!("expected build to fail"),
    }
}

#[test]
fn build_requires_a_news_capable_connector() {
    assert_invalid(Sentivol::builder().build(), "news-capable");
}

#[test]
fn build_requires_a_price_capable_connector() {
    let news_only = NewsApiConnector::new("key").unwrap();
    assert_invalid(
        Sentivol::builder()
            .with_connector(Arc::new(news_only))
            .build(),
        "price-capable",
    );
}

#[test]
fn build_validates_the_configuration() {
    let empty = SentivolConfig {
        companies: vec![],
        ..SentivolConfig::default()
    };
    assert_invalid(
        Sentivol::builder()
            .with_connector(Arc::new(MockConnector::new()))
            .config(empty)
            .build(),
        "no companies",
    );

    let dup = SentivolConfig {
        companies: vec![
            CompanyTicker::new("Apple", "AAPL"),
            CompanyTicker::new("Apple Inc", "AAPL"),
        ],
        ..SentivolConfig::default()
    };
    assert_invalid(
        Sentivol::builder()
            .with_connector(Arc::new(MockConnector::new()))
            .config(dup)
            .build(),
        "duplicate ticker",
    );
}

#[test]
fn single_connector_may_serve_both_capabilities() {
    let sv = Sentivol::builder()
        .with_connector(Arc::new(DynamicMock::new()))
        .build()
        .unwrap();
    assert_eq!(sv.config().companies.len(), 3);
    assert_eq!(sv.config().output_dir, std::path::PathBuf::from("project_data"));
}
