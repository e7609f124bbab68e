#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use sentivol::{CompanyTicker, Sentivol, SentivolConfig};
use sentivol_core::{NewsArticle, PricePoint};
use sentivol_mock::{DynamicMock, FixedScorer};

pub const APPLE: &str = "Apple";
pub const TESLA: &str = "Tesla";
pub const AAPL: &str = "AAPL";
pub const TSLA: &str = "TSLA";

/// Reference date whose default window is 2024-05-12 ..= 2024-05-16.
pub fn today() -> NaiveDate {
    d(5, 20)
}

pub fn d(m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, m, day).unwrap()
}

pub fn at(ts: &str) -> DateTime<Utc> {
    ts.parse().unwrap()
}

pub fn article(company: &str, ticker: &str, title: &str, published: &str) -> NewsArticle {
    NewsArticle {
        company: company.to_string(),
        ticker: ticker.to_string(),
        title: Some(title.to_string()),
        published_at: Some(at(published)),
        source: None,
        url: None,
    }
}

pub fn bar(ticker: &str, date: NaiveDate, high: f64, low: f64) -> PricePoint {
    PricePoint {
        ticker: ticker.to_string(),
        company: None,
        date,
        open: low,
        high,
        low,
        close: high,
        adj_close: None,
        volume: Some(1_000),
    }
}

/// Apple/AAPL and Tesla/TSLA writing into `dir`.
pub fn config(dir: &Path) -> SentivolConfig {
    SentivolConfig {
        companies: vec![
            CompanyTicker::new(APPLE, AAPL),
            CompanyTicker::new(TESLA, TSLA),
        ],
        output_dir: dir.to_path_buf(),
        ..SentivolConfig::default()
    }
}

pub fn sentivol(mock: &DynamicMock, scorer: FixedScorer, cfg: SentivolConfig) -> Sentivol {
    Sentivol::builder()
        .with_connector(Arc::new(mock.clone()))
        .scorer(Arc::new(scorer))
        .config(cfg)
        .build()
        .unwrap()
}

pub fn read_csv(path: &Path) -> (Vec<String>, Vec<Vec<String>>) {
    let mut r = csv::Reader::from_path(path).unwrap();
    let header = r.headers().unwrap().iter().map(str::to_string).collect();
    let rows = r
        .records()
        .map(|rec| rec.unwrap().iter().map(str::to_string).collect())
        .collect();
    (header, rows)
}
