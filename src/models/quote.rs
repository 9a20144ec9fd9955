use chrono::{DateTime, TimeZone, Utc};
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// A single time-stamped amount: a closing price or a dividend payout.
/// Ordered by timestamp first, so a series sorts chronologically.
#[derive(Clone, Copy, Debug, Eq, Getters, Ord, PartialEq, PartialOrd, new)]
pub struct Quote {
    timestamp_millis: i64,
    amount: Decimal,
}

impl Quote {
    pub fn timestamp(&self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.timestamp_millis)
            .single()
            .unwrap_or(DateTime::UNIX_EPOCH)
    }
}
