use std::collections::HashMap;

use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, Getters, new)]
pub struct YahooChartResponseDto {
    chart: YahooChartDto,
}

#[derive(Clone, Debug, Deserialize, Getters, new)]
pub struct YahooChartDto {
    result: Option<Vec<YahooChartResultDto>>,
    error: Option<YahooErrorDto>,
}

#[derive(Clone, Debug, Deserialize, Getters, new)]
pub struct YahooErrorDto {
    code: String,
    description: String,
}

#[derive(Clone, Debug, Deserialize, Getters, new)]
pub struct YahooChartResultDto {
    meta: YahooMetaDto,
    timestamp: Option<Vec<i64>>,
    events: Option<YahooEventsDto>,
    indicators: YahooIndicatorsDto,
}

#[derive(Clone, Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct YahooMetaDto {
    symbol: String,
    currency: Option<String>,
    regular_market_price: Option<Decimal>,
    chart_previous_close: Option<Decimal>,
    previous_close: Option<Decimal>,
    regular_market_time: Option<i64>,
}

#[derive(Clone, Debug, Deserialize, Getters, new)]
pub struct YahooEventsDto {
    dividends: Option<HashMap<String, YahooDividendDto>>,
}

#[derive(Clone, Debug, Deserialize, Getters, new)]
pub struct YahooDividendDto {
    amount: Decimal,
    date: i64,
}

#[derive(Clone, Debug, Deserialize, Getters, new)]
pub struct YahooIndicatorsDto {
    adjclose: Option<Vec<YahooAdjCloseDto>>,
}

#[derive(Clone, Debug, Deserialize, Getters, new)]
pub struct YahooAdjCloseDto {
    adjclose: Option<Vec<Option<Decimal>>>,
}
