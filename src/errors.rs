use thiserror::Error;

/// Failure of a provider call: network error, unknown symbol or an
/// unparseable response. An empty result for a date range is not an error.
#[derive(Debug, Error)]
#[error("No quote data available for {symbol}: {cause}")]
pub struct DataUnavailable {
    symbol: String,
    cause: anyhow::Error,
}

impl DataUnavailable {
    pub fn new(symbol: impl Into<String>, cause: impl Into<anyhow::Error>) -> Self {
        Self {
            symbol: symbol.into(),
            cause: cause.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn cause(&self) -> &anyhow::Error {
        &self.cause
    }
}

pub type Result<T> = std::result::Result<T, DataUnavailable>;
