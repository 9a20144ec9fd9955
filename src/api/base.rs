use async_trait::async_trait;
use chrono::NaiveDate;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use strum_macros::{Display, EnumString};

use crate::errors::Result;

/// Bar granularity for historical price requests, in provider wire format.
#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
pub enum Interval {
    #[strum(serialize = "1d")]
    Daily,
    #[strum(serialize = "1wk")]
    Weekly,
    #[strum(serialize = "1mo")]
    Monthly,
}

/// Last traded price and day change as reported by the provider.
/// The price is missing for symbols the provider knows but has no
/// current trade for.
#[derive(Clone, Debug, Getters, new)]
pub struct CurrentQuote {
    symbol: String,
    price: Option<Decimal>,
    change_percent: Decimal,
}

/// One raw daily bar. Non-trading entries carry no adjusted close.
#[derive(Clone, Debug, Getters, new)]
pub struct HistoricalBar {
    date: NaiveDate,
    adj_close: Option<Decimal>,
}

/// One raw dividend payout.
#[derive(Clone, Debug, Getters, new)]
pub struct DividendRecord {
    date: NaiveDate,
    amount: Decimal,
}

/// Base trait for quote data providers.
///
/// "No data for this date range" is an empty result, never an error.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Fetch the current quote for a symbol.
    async fn fetch_current_quote(&self, symbol: &str) -> Result<CurrentQuote>;

    /// Fetch historical bars for a symbol since the given date.
    async fn fetch_historical_prices(
        &self,
        symbol: &str,
        from: NaiveDate,
        interval: Interval,
    ) -> Result<Vec<HistoricalBar>>;

    /// Fetch dividend payouts for a symbol since the given date.
    async fn fetch_dividend_history(
        &self,
        symbol: &str,
        from: NaiveDate,
    ) -> Result<Vec<DividendRecord>>;
}
