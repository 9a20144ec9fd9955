use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// One listed security as the portfolio sees it. The last known price and
/// day change are refreshed by the quote service, everything else is owned
/// by the caller.
#[derive(Clone, Debug, Getters, new)]
pub struct Stock {
    symbol: String,
    price: Decimal,
    change_percent: Decimal,
}

impl Stock {
    pub fn update_price(&mut self, price: Decimal, change_percent: Decimal) {
        self.price = price;
        self.change_percent = change_percent;
    }
}
