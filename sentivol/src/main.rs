use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use sentivol::{CompanyTicker, Correlation, Sentivol, SentivolConfig};
use sentivol_core::SentivolConnector;
use sentivol_newsapi::NewsApiConnector;
use sentivol_yfinance::YfConnector;

/// Correlate financial-news sentiment with same-day stock volatility.
#[derive(Debug, Parser)]
#[command(name = "sentivol", version, about)]
struct Cli {
    /// JSON configuration file; flags below override its values.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Company and ticker to analyze; repeat to analyze several. Replaces the configured list.
    #[arg(long = "company", value_name = "NAME=TICKER", value_parser = parse_pair)]
    companies: Vec<CompanyTicker>,

    /// Directory receiving the CSV and the plot.
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Days between today and the last analyzed day.
    #[arg(long, value_name = "DAYS")]
    end_offset_days: Option<u64>,

    /// Days between the first and the last analyzed day.
    #[arg(long, value_name = "DAYS")]
    window_days: Option<u64>,

    /// Reference date instead of the current UTC date.
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<NaiveDate>,

    /// NewsAPI key.
    #[arg(long, env = "NEWS_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Skip rendering the scatter plot.
    #[arg(long)]
    no_plot: bool,

    /// Override the NewsAPI endpoint root.
    #[arg(long, value_name = "URL")]
    news_base_url: Option<String>,

    /// Override the Yahoo Finance endpoint root.
    #[arg(long, value_name = "URL")]
    yahoo_base_url: Option<String>,

    /// Use deterministic fixture connectors instead of the network.
    #[arg(long, env = "SENTIVOL_USE_MOCK", value_parser = clap::builder::FalseyValueParser::new())]
    mock: bool,
}

fn parse_pair(s: &str) -> Result<CompanyTicker, String> {
    let (company, ticker) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=TICKER, got '{s}'"))?;
    let (company, ticker) = (company.trim(), ticker.trim());
    if company.is_empty() || ticker.is_empty() {
        return Err(format!("expected NAME=TICKER, got '{s}'"));
    }
    Ok(CompanyTicker::new(company, ticker))
}

impl Cli {
    fn load_config(&self) -> Result<SentivolConfig> {
        let mut cfg = match &self.config {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;
                serde_json::from_str(&raw)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => SentivolConfig::default(),
        };
        if !self.companies.is_empty() {
            cfg.companies.clone_from(&self.companies);
        }
        if let Some(dir) = &self.output_dir {
            cfg.output_dir.clone_from(dir);
        }
        if let Some(days) = self.end_offset_days {
            cfg.end_offset_days = days;
        }
        if let Some(days) = self.window_days {
            cfg.window_days = days;
        }
        if self.api_key.is_some() {
            cfg.news_api_key.clone_from(&self.api_key);
        }
        if self.no_plot {
            cfg.plot = false;
        }
        Ok(cfg)
    }

    fn connectors(&self, cfg: &SentivolConfig) -> Result<Vec<Arc<dyn SentivolConnector>>> {
        if self.mock {
            tracing::info!("using fixture connectors");
            let mock: Arc<dyn SentivolConnector> = Arc::new(sentivol_mock::MockConnector::new());
            return Ok(vec![mock]);
        }
        let mut news =
            NewsApiConnector::builder().api_key(cfg.news_api_key.clone().unwrap_or_default());
        if let Some(url) = &self.news_base_url {
            news = news.base_url(url.clone());
        }
        let news = news
            .build()
            .context("configuring the news connector (set NEWS_API_KEY or --api-key)")?;
        let prices = match &self.yahoo_base_url {
            Some(url) => YfConnector::with_base_url(url)?,
            None => YfConnector::new_default(),
        };
        let news: Arc<dyn SentivolConnector> = Arc::new(news);
        let prices: Arc<dyn SentivolConnector> = Arc::new(prices);
        Ok(vec![news, prices])
    }
}

async fn run(cli: Cli) -> Result<()> {
    let cfg = cli.load_config()?;
    let connectors = cli.connectors(&cfg)?;
    let mut builder = Sentivol::builder().config(cfg);
    for c in connectors {
        builder = builder.with_connector(c);
    }
    let sv = builder.build()?;

    let today = cli.today.unwrap_or_else(|| chrono::Utc::now().date_naive());
    let report = sv.run(today).await?;

    match report.correlation {
        Some(Correlation::Computed(r)) => {
            println!("Pearson correlation between sentiment and volatility: {r:.4}");
        }
        Some(Correlation::Skipped { rows }) => {
            println!("Correlation skipped: only {rows} merged rows.");
        }
        None => println!("Analysis skipped: the merged dataset is empty."),
    }
    if let Some(p) = &report.csv_path {
        println!("Merged data: {}", p.display());
    }
    if let Some(p) = &report.plot_path {
        println!("Plot: {}", p.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting the async runtime")?;
    rt.block_on(run(cli))
}
