use std::time::Instant;

use chrono::{NaiveDate, NaiveTime};
use log::{debug, error};

use crate::{
    api::base::{HistoricalBar, Interval, QuoteProvider},
    models::{Quote, Stock},
};

/// Facade over a quote provider. Fetches raw provider data, normalizes it
/// into ordered series and applies price updates to caller-owned stocks.
///
/// None of the public operations raise: provider failures are logged and
/// turned into a neutral result (`false` or an empty series), so a flaky
/// network never takes the caller down.
pub struct QuoteService<P> {
    provider: P,
}

impl<P: QuoteProvider> QuoteService<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Refreshes the stock's last price and day change.
    ///
    /// Returns true only when the observed price is present and differs
    /// from the stored one, so no-op polls never trigger change listeners
    /// downstream.
    pub async fn update_stock(&self, stock: &mut Stock) -> bool {
        let start = Instant::now();

        let quote = match self.provider.fetch_current_quote(stock.symbol()).await {
            Ok(quote) => quote,
            Err(e) => {
                error!("Failed to retrieve quote for {}: {}", stock.symbol(), e);
                return false;
            }
        };
        let duration = start.elapsed();

        let price = match quote.price() {
            Some(price) => *price,
            None => return false,
        };

        if price == *stock.price() {
            return false;
        }

        stock.update_price(price, *quote.change_percent());
        debug!(
            "Updated {}: $ {:.2} ({:.2} %) ({} ms)",
            stock.symbol(),
            stock.price(),
            stock.change_percent(),
            duration.as_millis()
        );

        true
    }

    /// Returns the full daily price history, ascending by time.
    pub async fn get_historic_prices(&self, stock: &Stock) -> Vec<Quote> {
        let start = Instant::now();

        let bars = match self
            .provider
            .fetch_historical_prices(stock.symbol(), history_start(), Interval::Daily)
            .await
        {
            Ok(bars) => bars,
            Err(e) => {
                error!(
                    "Failed to retrieve historic prices for {}: {}",
                    stock.symbol(),
                    e
                );
                return Vec::new();
            }
        };

        let mut prices: Vec<Quote> = bars.iter().filter_map(quote_from_bar).collect();
        prices.sort_by_key(|quote| *quote.timestamp_millis());

        debug!(
            "Retrieved {} historic prices for {} in {} ms",
            prices.len(),
            stock.symbol(),
            start.elapsed().as_millis()
        );

        prices
    }

    /// Returns the full dividend payout history, ascending by time.
    pub async fn get_dividend_payouts(&self, stock: &Stock) -> Vec<Quote> {
        let start = Instant::now();

        let records = match self
            .provider
            .fetch_dividend_history(stock.symbol(), history_start())
            .await
        {
            Ok(records) => records,
            Err(e) => {
                error!(
                    "Failed to retrieve dividend payouts for {}: {}",
                    stock.symbol(),
                    e
                );
                return Vec::new();
            }
        };

        let mut payouts: Vec<Quote> = records
            .iter()
            .map(|record| Quote::new(to_epoch_millis(*record.date()), *record.amount()))
            .collect();
        payouts.sort_by_key(|quote| *quote.timestamp_millis());

        debug!(
            "Retrieved {} dividend payouts for {} in {} ms",
            payouts.len(),
            stock.symbol(),
            start.elapsed().as_millis()
        );

        payouts
    }
}

// As far back as the provider keeps records.
fn history_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).expect("Invalid history start date")
}

// Bars without an adjusted close carry no usable price and are dropped.
fn quote_from_bar(bar: &HistoricalBar) -> Option<Quote> {
    bar.adj_close()
        .as_ref()
        .map(|price| Quote::new(to_epoch_millis(*bar.date()), *price))
}

// Calendar dates are anchored at UTC midnight.
fn to_epoch_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}
