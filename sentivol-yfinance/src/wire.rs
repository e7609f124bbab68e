//! Response body of the `/v8/finance/chart/{ticker}` endpoint.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct ChartEnvelope {
    pub chart: ChartBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartBody {
    #[serde(default)]
    pub result: Option<Vec<ChartData>>,
    #[serde(default)]
    pub error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartData {
    pub meta: ChartMeta,
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ChartMeta {
    #[serde(default)]
    pub exchange_timezone_name: Option<String>,
    #[serde(default)]
    pub gmtoffset: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
    #[serde(default)]
    pub adjclose: Vec<AdjCloseBlock>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct QuoteBlock {
    #[serde(default)]
    pub open: Vec<Option<f64>>,
    #[serde(default)]
    pub high: Vec<Option<f64>>,
    #[serde(default)]
    pub low: Vec<Option<f64>>,
    #[serde(default)]
    pub close: Vec<Option<f64>>,
    #[serde(default)]
    pub volume: Vec<Option<u64>>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AdjCloseBlock {
    #[serde(default)]
    pub adjclose: Vec<Option<f64>>,
}
