use std::time::Duration;

use anyhow::{Error, anyhow};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use reqwest::Client;
use rust_decimal::Decimal;

use crate::{
    api::{
        base::{CurrentQuote, DividendRecord, HistoricalBar, Interval, QuoteProvider},
        utils::make_request,
        yahoo_dto::{YahooChartResponseDto, YahooChartResultDto},
    },
    errors::{DataUnavailable, Result},
};

const BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Quote provider backed by the Yahoo Finance chart API.
///
/// The endpoint is not officially supported, so its reliability and
/// durability cannot be guaranteed.
#[derive(Clone, Debug)]
pub struct YahooApi {
    client: Client,
}

impl Default for YahooApi {
    fn default() -> Self {
        Self::new()
    }
}

impl YahooApi {
    pub fn new() -> Self {
        let timeout = std::env::var("QUOTE_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self::with_timeout(Duration::from_secs(timeout))
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self { client }
    }

    async fn fetch_chart(&self, symbol: &str, params: &str) -> anyhow::Result<YahooChartResultDto> {
        let url = format!("{}/{}?{}", BASE_URL, symbol, params);
        let response = make_request::<YahooChartResponseDto>(&self.client, &url).await?;

        chart_result(response)
    }
}

#[async_trait]
impl QuoteProvider for YahooApi {
    async fn fetch_current_quote(&self, symbol: &str) -> Result<CurrentQuote> {
        let result = self
            .fetch_chart(symbol, "range=1d&interval=1d")
            .await
            .map_err(|e| DataUnavailable::new(symbol, e))?;

        Ok(current_quote_from_chart(symbol, &result))
    }

    async fn fetch_historical_prices(
        &self,
        symbol: &str,
        from: NaiveDate,
        interval: Interval,
    ) -> Result<Vec<HistoricalBar>> {
        let params = format!(
            "period1={}&period2={}&interval={}",
            epoch_seconds(from),
            Utc::now().timestamp(),
            interval
        );
        let result = self
            .fetch_chart(symbol, &params)
            .await
            .map_err(|e| DataUnavailable::new(symbol, e))?;

        Ok(bars_from_chart(&result))
    }

    async fn fetch_dividend_history(
        &self,
        symbol: &str,
        from: NaiveDate,
    ) -> Result<Vec<DividendRecord>> {
        let params = format!(
            "period1={}&period2={}&interval=1d&events=div",
            epoch_seconds(from),
            Utc::now().timestamp()
        );
        let result = self
            .fetch_chart(symbol, &params)
            .await
            .map_err(|e| DataUnavailable::new(symbol, e))?;

        Ok(dividends_from_chart(&result))
    }
}

pub(crate) fn chart_result(response: YahooChartResponseDto) -> anyhow::Result<YahooChartResultDto> {
    if let Some(error) = response.chart().error() {
        return Err(anyhow!("{}: {}", error.code(), error.description()));
    }

    response
        .chart()
        .result()
        .as_ref()
        .and_then(|results| results.first())
        .cloned()
        .ok_or_else(|| Error::msg("Empty chart response"))
}

pub(crate) fn current_quote_from_chart(symbol: &str, result: &YahooChartResultDto) -> CurrentQuote {
    let meta = result.meta();
    let price = *meta.regular_market_price();
    let previous_close = (*meta.chart_previous_close()).or(*meta.previous_close());

    let change_percent = match (price, previous_close) {
        (Some(price), Some(previous)) if !previous.is_zero() => {
            (price - previous) / previous * Decimal::ONE_HUNDRED
        }
        _ => Decimal::ZERO,
    };

    CurrentQuote::new(symbol.to_string(), price, change_percent)
}

pub(crate) fn bars_from_chart(result: &YahooChartResultDto) -> Vec<HistoricalBar> {
    let timestamps = match result.timestamp() {
        Some(timestamps) => timestamps,
        None => return Vec::new(),
    };
    let closes = result
        .indicators()
        .adjclose()
        .as_ref()
        .and_then(|series| series.first())
        .and_then(|series| series.adjclose().as_ref());

    timestamps
        .iter()
        .enumerate()
        .map(|(i, seconds)| {
            let close = closes.and_then(|values| values.get(i).copied().flatten());
            HistoricalBar::new(date_from_epoch(*seconds), close)
        })
        .collect()
}

pub(crate) fn dividends_from_chart(result: &YahooChartResultDto) -> Vec<DividendRecord> {
    let dividends = match result.events().as_ref().and_then(|e| e.dividends().as_ref()) {
        Some(dividends) => dividends,
        None => return Vec::new(),
    };

    dividends
        .values()
        .map(|payout| DividendRecord::new(date_from_epoch(*payout.date()), *payout.amount()))
        .collect()
}

fn epoch_seconds(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

// Bar timestamps mark the session open; the calendar date is taken in UTC.
fn date_from_epoch(seconds: i64) -> NaiveDate {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .map(|dt| dt.date_naive())
        .unwrap_or_default()
}
