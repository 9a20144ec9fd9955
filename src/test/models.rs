#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    use crate::models::{Quote, Stock};

    #[test]
    fn quotes_order_by_timestamp() {
        let earlier = Quote::new(1_000, dec!(99.0));
        let later = Quote::new(2_000, dec!(1.0));

        assert!(earlier < later);

        let mut series = vec![later, earlier];
        series.sort();
        assert_eq!(series, vec![earlier, later]);
    }

    #[test]
    fn quote_equality_is_by_value() {
        assert_eq!(Quote::new(1_000, dec!(10.0)), Quote::new(1_000, dec!(10.0)));
        assert_ne!(Quote::new(1_000, dec!(10.0)), Quote::new(1_000, dec!(10.1)));
        assert_ne!(Quote::new(1_000, dec!(10.0)), Quote::new(2_000, dec!(10.0)));
    }

    #[test]
    fn quote_exposes_its_timestamp_as_utc() {
        let quote = Quote::new(1_577_923_200_000, dec!(0.22));

        assert_eq!(
            quote.timestamp(),
            Utc.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn update_price_sets_both_fields() {
        let mut stock = Stock::new(String::from("ACME"), dec!(10.00), dec!(0));

        stock.update_price(dec!(10.50), dec!(5.0));

        assert_eq!(*stock.price(), dec!(10.50));
        assert_eq!(*stock.change_percent(), dec!(5.0));
    }
}
