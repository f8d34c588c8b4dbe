use crate::common::{client_for, mock_quote, setup_server};
use ystockquote::quote::{codes_for, decode_quote_csv};
use ystockquote::{BULK_FIELDS, Field, QuoteRecord, Ticker, YqClient, YqError};

fn synthetic_body(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|f| format!("v-{}", f.name()))
        .collect::<Vec<_>>()
        .join(",")
}

async fn fetch_with_order(client: &YqClient, server: &httpmock::MockServer, fields: &[Field]) -> QuoteRecord {
    let mock = mock_quote(server, "MSFT", &codes_for(fields), &synthetic_body(fields));
    let record = ystockquote::get_fields(client, "MSFT", fields).await.unwrap();
    mock.assert();
    record
}

#[tokio::test]
async fn shuffled_field_order_yields_same_named_values() {
    let server = setup_server();
    let client = client_for(&server);

    let forward: Vec<Field> = BULK_FIELDS[..12].to_vec();
    let mut shuffled = forward.clone();
    shuffled.reverse();
    shuffled.swap(0, 5);

    let a = fetch_with_order(&client, &server, &forward).await;
    let b = fetch_with_order(&client, &server, &shuffled).await;

    assert_eq!(a.len(), forward.len());
    assert_eq!(b.len(), forward.len());
    for f in &forward {
        let expected = format!("v-{}", f.name());
        assert_eq!(a.get(*f), Some(expected.as_str()));
        assert_eq!(b.get(*f), Some(expected.as_str()));
    }
    assert_eq!(a.to_map(), b.to_map());
}

#[test]
fn decode_round_trip_keeps_every_field() {
    let fields: Vec<Field> = BULK_FIELDS.to_vec();
    let decoded = decode_quote_csv(&synthetic_body(&fields), &fields).unwrap();

    assert_eq!(decoded.len(), fields.len());
    for ((field, value), expected) in decoded.iter().zip(&fields) {
        assert_eq!(field, expected);
        assert_eq!(value, &format!("v-{}", expected.name()));
    }
}

#[test]
fn decode_rejects_count_mismatch() {
    let fields = [Field::PreviousClose, Field::Volume, Field::Eps];
    let err = decode_quote_csv("1.0,2", &fields).unwrap_err();
    assert!(matches!(err, YqError::FieldCount { expected: 3, found: 2 }));
}

#[tokio::test]
async fn separator_fields_in_a_subset_get_their_own_request() {
    let server = setup_server();
    let client = client_for(&server);

    let positional = mock_quote(&server, "MSFT", "pv", "401.10,21034500");
    let shares = mock_quote(&server, "MSFT", "j2", "7,430,000,000");

    let record = Ticker::new(&client, "MSFT")
        .fields(&[Field::PreviousClose, Field::SharesOutstanding, Field::Volume])
        .await
        .unwrap();

    positional.assert();
    shares.assert();

    let order: Vec<(Field, &str)> = record.iter().collect();
    assert_eq!(
        order,
        vec![
            (Field::PreviousClose, "401.10"),
            (Field::SharesOutstanding, "7430000000"),
            (Field::Volume, "21034500"),
        ]
    );
}

#[tokio::test]
async fn duplicate_fields_are_requested_once() {
    let server = setup_server();
    let client = client_for(&server);
    let mock = mock_quote(&server, "MSFT", "pe", "401.10,11.80");

    let record = ystockquote::get_fields(
        &client,
        "MSFT",
        &[Field::PreviousClose, Field::Eps, Field::PreviousClose],
    )
    .await
    .unwrap();

    mock.assert();
    assert_eq!(record.len(), 2);
}

#[tokio::test]
async fn empty_field_list_is_rejected() {
    let server = setup_server();
    let client = client_for(&server);

    let err = ystockquote::get_fields(&client, "MSFT", &[]).await.unwrap_err();
    assert!(matches!(err, YqError::Data(_)));
}

#[tokio::test]
async fn lone_field_keeps_commas_in_its_value() {
    let server = setup_server();
    let client = client_for(&server);
    let name = mock_quote(&server, "AAPL", "n", "\"Apple, Inc.\"");
    let shares = mock_quote(&server, "AAPL", "j2", "5,120,000,000");

    let record = ystockquote::get_fields(&client, "AAPL", &[Field::CompanyName])
        .await
        .unwrap();
    assert_eq!(record.get(Field::CompanyName), Some("\"Apple, Inc.\""));

    let record = ystockquote::get_fields(
        &client,
        "AAPL",
        &[Field::CompanyName, Field::SharesOutstanding],
    )
    .await
    .unwrap();
    assert_eq!(record.get(Field::CompanyName), Some("\"Apple, Inc.\""));
    assert_eq!(record.get(Field::SharesOutstanding), Some("5120000000"));

    let single = ystockquote::get(&client, "AAPL", Field::CompanyName).await.unwrap();
    assert_eq!(single, "\"Apple, Inc.\"");

    name.assert_hits(3);
    shares.assert_hits(1);
}
