#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    use crate::api::base::QuoteProvider;
    use crate::api::yahoo::{
        YahooApi, bars_from_chart, chart_result, current_quote_from_chart, dividends_from_chart,
    };
    use crate::api::yahoo_dto::{YahooChartResponseDto, YahooChartResultDto};

    const CHART_JSON: &str = r#"{
        "chart": {
            "result": [
                {
                    "meta": {
                        "currency": "USD",
                        "symbol": "ACME",
                        "regularMarketPrice": 10.5,
                        "chartPreviousClose": 10.0,
                        "regularMarketTime": 1578038400
                    },
                    "timestamp": [1577865600, 1577952000, 1578038400],
                    "events": {
                        "dividends": {
                            "1577952000": { "amount": 0.22, "date": 1577952000 }
                        }
                    },
                    "indicators": {
                        "quote": [
                            { "close": [10.0, null, 10.2] }
                        ],
                        "adjclose": [
                            { "adjclose": [10.0, null, 10.2] }
                        ]
                    }
                }
            ],
            "error": null
        }
    }"#;

    const BARE_CHART_JSON: &str = r#"{
        "chart": {
            "result": [
                {
                    "meta": { "currency": "USD", "symbol": "ACME" },
                    "indicators": { "quote": [] }
                }
            ],
            "error": null
        }
    }"#;

    const ERROR_JSON: &str = r#"{
        "chart": {
            "result": null,
            "error": {
                "code": "Not Found",
                "description": "No data found, symbol may be delisted"
            }
        }
    }"#;

    fn parse_chart(json: &str) -> YahooChartResultDto {
        let response = serde_json::from_str::<YahooChartResponseDto>(json).unwrap();
        chart_result(response).unwrap()
    }

    #[test]
    fn current_quote_comes_from_the_chart_meta() {
        let result = parse_chart(CHART_JSON);

        let quote = current_quote_from_chart("ACME", &result);

        assert_eq!(quote.symbol(), "ACME");
        assert_eq!(*quote.price(), Some(dec!(10.5)));
        assert_eq!(*quote.change_percent(), dec!(5.0));
    }

    #[test]
    fn null_closes_stay_missing_in_raw_bars() {
        let result = parse_chart(CHART_JSON);

        let bars = bars_from_chart(&result);

        assert_eq!(bars.len(), 3);
        assert_eq!(*bars[0].adj_close(), Some(dec!(10.0)));
        assert_eq!(*bars[1].adj_close(), None);
        assert_eq!(*bars[2].adj_close(), Some(dec!(10.2)));
        assert_eq!(
            *bars[0].date(),
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap()
        );
    }

    #[test]
    fn dividend_events_become_records() {
        let result = parse_chart(CHART_JSON);

        let dividends = dividends_from_chart(&result);

        assert_eq!(dividends.len(), 1);
        assert_eq!(*dividends[0].amount(), dec!(0.22));
        assert_eq!(
            *dividends[0].date(),
            NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()
        );
    }

    #[test]
    fn chart_without_data_yields_empty_results() {
        let result = parse_chart(BARE_CHART_JSON);

        assert!(bars_from_chart(&result).is_empty());
        assert!(dividends_from_chart(&result).is_empty());

        let quote = current_quote_from_chart("ACME", &result);
        assert_eq!(*quote.price(), None);
        assert_eq!(*quote.change_percent(), rust_decimal::Decimal::ZERO);
    }

    #[test]
    fn interval_wire_format_round_trips() {
        use std::str::FromStr;

        use crate::api::base::Interval;

        assert_eq!(Interval::Daily.to_string(), "1d");
        assert_eq!(Interval::from_str("1d"), Ok(Interval::Daily));
        assert_eq!(Interval::from_str("1wk"), Ok(Interval::Weekly));
        assert_eq!(Interval::from_str("1mo"), Ok(Interval::Monthly));
    }

    #[test]
    fn error_payload_is_rejected() {
        let response = serde_json::from_str::<YahooChartResponseDto>(ERROR_JSON).unwrap();

        let error = chart_result(response).unwrap_err();

        assert!(error.to_string().contains("Not Found"));
    }

    #[tokio::test]
    #[ignore = "requires network access to Yahoo Finance"]
    async fn get_quote_works() {
        dotenv::dotenv().ok();
        let api = YahooApi::new();

        let result = api.fetch_current_quote("AAPL").await.unwrap();

        assert_eq!(result.symbol(), "AAPL");
        assert!(result.price().is_some());
    }
}
