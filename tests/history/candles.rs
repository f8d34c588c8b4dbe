use crate::common::fixture;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;
use ystockquote::YqError;
use ystockquote::history::decode_history_csv;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn candles_convert_in_response_order() {
    let series = decode_history_csv("GOOG", &fixture("table_csv", "GOOG", "csv")).unwrap();
    let candles = series.candles().unwrap();

    assert_eq!(candles.len(), 4);
    assert_eq!(candles[0].date, NaiveDate::from_ymd_opt(2013, 1, 8).unwrap());

    let c = &candles[2];
    assert_eq!(c.date, NaiveDate::from_ymd_opt(2013, 1, 4).unwrap());
    assert_eq!(c.open, dec("729.34"));
    assert_eq!(c.high, dec("741.47"));
    assert_eq!(c.low, dec("727.68"));
    assert_eq!(c.close, dec("737.97"));
    assert_eq!(c.volume, 5_497_400);
    assert_eq!(c.adj_close, dec("737.97"));
}

#[test]
fn non_numeric_value_fails_only_on_conversion() {
    let body = "Date,Open,High,Low,Close,Volume,Adj Close\n2013-01-04,N/A,1,1,1,100,1\n";
    let series = decode_history_csv("X", body).unwrap();

    let row = series.get("2013-01-04").unwrap();
    assert_eq!(row.get("Open"), Some("N/A"));
    assert!(matches!(row.to_candle("2013-01-04"), Err(YqError::Parse(_))));
}

#[test]
fn missing_column_fails_conversion() {
    let body = "Date,Open,Close\n2013-01-04,1,2\n";
    let series = decode_history_csv("X", body).unwrap();
    assert!(matches!(series.candles(), Err(YqError::Parse(_))));
}
