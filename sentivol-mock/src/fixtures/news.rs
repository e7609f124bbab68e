use chrono::{Days, NaiveDate, NaiveTime};
use sentivol_core::{CompanyTicker, NewsArticle, NewsRequest};

type Headlines = &'static [(u64, &'static str)];

const AAPL: Headlines = &[
    (0, "Apple shares rally after strong iPhone demand"),
    (0, "Apple supplier warns of weak orders"),
    (1, "Apple faces antitrust lawsuit in Europe"),
    (3, "Apple stock climbs to record high"),
];

const TSLA: Headlines = &[
    (0, "Tesla recalls vehicles over faulty software"),
    (2, "Tesla stock jumps on delivery beat"),
    (2, "Tesla market share slips in China"),
];

const MSFT: Headlines = &[
    (1, "Microsoft cloud growth impresses investors"),
    (4, "Microsoft market value slips after outage"),
];

const GOOG: Headlines = &[
    (1, "Alphabet stock gains on strong ad sales"),
    (2, "Alphabet hit with record fine"),
];

/// (days after the window start, headline) per ticker.
fn headlines(ticker: &str) -> Option<Headlines> {
    match ticker {
        "AAPL" => Some(AAPL),
        "TSLA" => Some(TSLA),
        "MSFT" => Some(MSFT),
        "GOOG" => Some(GOOG),
        _ => None,
    }
}

pub fn by_pair(pair: &CompanyTicker, req: &NewsRequest) -> Option<Vec<NewsArticle>> {
    let rows = headlines(&pair.ticker)?;
    let afternoon = NaiveTime::from_hms_opt(14, 0, 0)?;
    Some(
        rows.iter()
            .filter_map(|(offset, title)| {
                let day: NaiveDate = req.from.checked_add_days(Days::new(*offset))?;
                if day > req.to {
                    return None;
                }
                Some(NewsArticle {
                    company: pair.company.clone(),
                    ticker: pair.ticker.clone(),
                    title: Some((*title).to_string()),
                    published_at: Some(day.and_time(afternoon).and_utc()),
                    source: Some("Mock Wire".to_string()),
                    url: None,
                })
            })
            .take(req.page_size as usize)
            .collect(),
    )
}
