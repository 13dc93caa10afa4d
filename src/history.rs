//! Historical reserve rates
//!
//! The rates API buckets supply and borrow rates per reserve. The overview
//! treats a fetch as a value with three states and never retries or caches.

use crate::error::{ReserveError, Result};
use crate::types::{MarketInfo, ReserveView, TimeSeriesPoint};
use chrono::{Duration as ChronoDuration, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// How far back the history window reaches
pub const HISTORY_WINDOW_DAYS: i64 = 45;

/// Bucket size requested from the rates API
pub const RESOLUTION_HOURS: u32 = 6;

/// Observable state of a history fetch
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RateHistory {
    /// Request in flight, no data yet
    #[default]
    Loading,
    /// Request failed
    Failed,
    /// Data arrived
    Ready(Vec<TimeSeriesPoint>),
}

impl RateHistory {
    pub fn is_failed(&self) -> bool {
        matches!(self, RateHistory::Failed)
    }

    /// Points if ready, empty otherwise
    pub fn points(&self) -> &[TimeSeriesPoint] {
        match self {
            RateHistory::Ready(points) => points,
            _ => &[],
        }
    }
}

impl From<Result<Vec<TimeSeriesPoint>>> for RateHistory {
    fn from(result: Result<Vec<TimeSeriesPoint>>) -> Self {
        match result {
            Ok(points) => RateHistory::Ready(points),
            Err(e) => {
                warn!("Rates history fetch failed: {}", e);
                RateHistory::Failed
            }
        }
    }
}

/// Key the rates API indexes reserves by
pub fn reserve_id(reserve: &ReserveView, market: &MarketInfo) -> String {
    format!(
        "{}{}",
        reserve.underlying_asset, market.lending_pool_address_provider
    )
}

#[derive(Debug, Deserialize)]
struct BucketStart {
    year: i32,
    /// Zero-based
    month: u32,
    date: u32,
    hours: u32,
}

#[derive(Debug, Deserialize)]
struct ApiBucket {
    #[serde(rename = "liquidityRate_avg")]
    liquidity_rate_avg: f64,
    #[serde(rename = "variableBorrowRate_avg")]
    variable_borrow_rate_avg: f64,
    #[serde(rename = "stableBorrowRate_avg", default)]
    stable_borrow_rate_avg: f64,
    #[serde(rename = "utilizationRate_avg", default)]
    utilization_rate_avg: f64,
    x: BucketStart,
}

impl ApiBucket {
    fn into_point(self) -> Option<TimeSeriesPoint> {
        let date = NaiveDate::from_ymd_opt(self.x.year, self.x.month.checked_add(1)?, self.x.date)?
            .and_hms_opt(self.x.hours, 0, 0)?
            .and_utc()
            .timestamp_millis();

        Some(TimeSeriesPoint {
            date,
            liquidity_rate: self.liquidity_rate_avg,
            stable_borrow_rate: self.stable_borrow_rate_avg,
            variable_borrow_rate: self.variable_borrow_rate_avg,
            utilization_rate: self.utilization_rate_avg,
        })
    }
}

/// Decode a rates API response body; buckets with impossible dates are dropped
pub fn parse_history(body: &str) -> Result<Vec<TimeSeriesPoint>> {
    let buckets: Vec<ApiBucket> = serde_json::from_str(body)?;
    let total = buckets.len();

    let mut points: Vec<TimeSeriesPoint> = buckets
        .into_iter()
        .filter_map(ApiBucket::into_point)
        .collect();
    points.sort_by_key(|p| p.date);

    if points.len() < total {
        debug!("Dropped {} malformed history buckets", total - points.len());
    }

    Ok(points)
}

/// HTTP client for the rates history API
#[derive(Debug, Clone)]
pub struct RatesHistoryClient {
    client: Client,
    api_url: String,
}

impl RatesHistoryClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
        }
    }

    /// Client for the market, if the market exposes a rates API
    pub fn for_market(market: &MarketInfo) -> Option<Self> {
        market.rates_history_api_url.as_deref().map(Self::new)
    }

    /// Fetch the history window for `reserve_id`
    pub async fn fetch(&self, reserve_id: &str) -> Result<Vec<TimeSeriesPoint>> {
        let from = (Utc::now() - ChronoDuration::days(HISTORY_WINDOW_DAYS)).timestamp();
        let from = from.to_string();
        let resolution = RESOLUTION_HOURS.to_string();

        debug!("Fetching rates history for {}", reserve_id);
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("reserveId", reserve_id),
                ("from", from.as_str()),
                ("resolutionInHours", resolution.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ReserveError::HistoryUnavailable(response.status().to_string()));
        }

        let body = response.text().await?;
        parse_history(&body)
    }
}

/// History result routed back to the UI
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryUpdate {
    pub reserve_id: String,
    pub history: RateHistory,
}

/// Fetch in the background and deliver the outcome on `tx`
pub fn spawn_fetch(
    client: RatesHistoryClient,
    reserve_id: String,
    tx: mpsc::UnboundedSender<HistoryUpdate>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let history = RateHistory::from(client.fetch(&reserve_id).await);
        if tx.send(HistoryUpdate { reserve_id, history }).is_err() {
            debug!("History receiver dropped");
        }
    })
}
