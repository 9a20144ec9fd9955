pub mod api;
pub mod errors;
pub mod models;
pub mod services;

#[cfg(test)]
mod test;

pub use api::base::{CurrentQuote, DividendRecord, HistoricalBar, Interval, QuoteProvider};
pub use api::yahoo::YahooApi;
pub use errors::DataUnavailable;
pub use models::{Quote, Stock};
pub use services::QuoteService;
