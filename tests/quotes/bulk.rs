use crate::common::{BULK_CODES, client_for, fixture, mock_quote, mock_separate_fields, setup_server};
use ystockquote::{BULK_FIELDS, Field, SEPARATE_FIELDS, YqError};

#[tokio::test]
async fn get_all_maps_positions_to_documented_names() {
    let server = setup_server();
    let bulk = mock_quote(
        &server,
        "GOOG",
        BULK_CODES,
        &fixture("quotes_csv", "GOOG_bulk", "csv"),
    );
    let separate = mock_separate_fields(&server, "GOOG");
    let client = client_for(&server);

    let record = ystockquote::get_all(&client, "GOOG").await.unwrap();

    bulk.assert();
    for m in &separate {
        m.assert();
    }

    assert_eq!(record.symbol(), "GOOG");
    assert_eq!(record.len(), BULK_FIELDS.len() + SEPARATE_FIELDS.len());
    assert_eq!(record.len(), 80);

    assert_eq!(record.get(Field::DividendYield), Some("1.5"));
    assert_eq!(record.get(Field::DividendPerShare), Some("0.40"));
    assert_eq!(record.get(Field::AskRealtime), Some("100.25"));
    assert_eq!(record.get(Field::PreviousClose), Some("99.80"));
    assert_eq!(record.get(Field::LastTradePrice), Some("100.25"));
    assert_eq!(record.get(Field::FiftytwoWeekHigh), Some("121.40"));
    assert_eq!(record.get(Field::MarketCap), Some("312.5B"));
    assert_eq!(record.get(Field::CompanyName), Some("\"Google Inc.\""));
    assert_eq!(record.get(Field::FiftytwoWeekRange), Some("\"80.12 - 121.40\""));
    assert_eq!(record.get(Field::StockExchange), Some("\"NasdaqNM\""));
    assert_eq!(record.get(Field::Volume), Some("3120456"));
    assert_eq!(record.get(Field::AverageDailyVolume), Some("2890123"));
    assert_eq!(record.get(Field::ShortRatio), Some("1.80"));
    assert_eq!(record.get(Field::HoldingsGain), Some("-"));
    assert_eq!(record.get(Field::HoldingsGainRealtime), Some("N/A"));
    assert_eq!(record.get_by_name("today_open"), Some("100.00"));
}

#[tokio::test]
async fn get_all_strips_separators_from_dedicated_fields() {
    let server = setup_server();
    let _bulk = mock_quote(
        &server,
        "GOOG",
        BULK_CODES,
        &fixture("quotes_csv", "GOOG_bulk", "csv"),
    );
    let _separate = mock_separate_fields(&server, "GOOG");
    let client = client_for(&server);

    let record = ystockquote::get_all(&client, "GOOG").await.unwrap();

    assert_eq!(record.get(Field::FloatShares), Some("1203456000"));
    assert_eq!(record.get(Field::SharesOutstanding), Some("1234567"));
    assert_eq!(record.get(Field::AskSize), Some("300"));
    assert_eq!(record.get(Field::BidSize), Some("1100"));
    assert_eq!(record.get(Field::LastTradeSize), Some("2500"));

    let order: Vec<Field> = record.iter().map(|(f, _)| f).collect();
    let expected: Vec<Field> = BULK_FIELDS
        .iter()
        .chain(SEPARATE_FIELDS.iter())
        .copied()
        .collect();
    assert_eq!(order, expected);
}

#[tokio::test]
async fn get_all_serializes_as_flat_name_map() {
    let server = setup_server();
    let _bulk = mock_quote(
        &server,
        "GOOG",
        BULK_CODES,
        &fixture("quotes_csv", "GOOG_bulk", "csv"),
    );
    let _separate = mock_separate_fields(&server, "GOOG");
    let client = client_for(&server);

    let record = ystockquote::get_all(&client, "GOOG").await.unwrap();
    let json = serde_json::to_value(&record).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj.len(), 80);
    assert_eq!(obj["previous_close"], "99.80");
    assert_eq!(obj["shares_outstanding"], "1234567");
    assert_eq!(record.to_map().get("eps").map(String::as_str), Some("4.12"));
}

#[tokio::test]
async fn truncated_bulk_response_is_a_field_count_error() {
    let server = setup_server();
    let full = fixture("quotes_csv", "GOOG_bulk", "csv");
    let truncated: Vec<&str> = full.trim().split(',').take(60).collect();
    let _bulk = mock_quote(&server, "GOOG", BULK_CODES, &truncated.join(","));
    let client = client_for(&server);

    let err = ystockquote::get_all(&client, "GOOG").await.unwrap_err();

    match err {
        YqError::FieldCount { expected, found } => {
            assert_eq!(expected, 75);
            assert_eq!(found, 60);
        }
        other => panic!("expected FieldCount, got {other:?}"),
    }
}

#[tokio::test]
async fn extra_values_are_also_rejected() {
    let server = setup_server();
    let body = format!("{},extra", fixture("quotes_csv", "GOOG_bulk", "csv").trim());
    let _bulk = mock_quote(&server, "GOOG", BULK_CODES, &body);
    let client = client_for(&server);

    let err = ystockquote::get_all(&client, "GOOG").await.unwrap_err();
    assert!(matches!(
        err,
        YqError::FieldCount {
            expected: 75,
            found: 76
        }
    ));
}
