#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;
use ystockquote::YqClient;

pub fn setup_server() -> MockServer {
    init_tracing();
    MockServer::start()
}

/// Route the crate's spans and events to the test writer. Filter with `RUST_LOG`.
#[cfg(feature = "tracing-subscriber")]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[cfg(not(feature = "tracing-subscriber"))]
pub fn init_tracing() {}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{key}.{ext}");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn live_or_record_enabled() -> bool {
    std::env::var("YQ_LIVE").ok().as_deref() == Some("1") || is_recording()
}

pub fn is_recording() -> bool {
    std::env::var("YQ_RECORD").ok().as_deref() == Some("1")
}

/// A client pointing both endpoints at the mock server.
pub fn client_for(server: &MockServer) -> YqClient {
    YqClient::builder()
        .base_quote_csv(Url::parse(&format!("{}/d/quotes.csv", server.base_url())).unwrap())
        .base_history_csv(Url::parse(&format!("{}/table.csv", server.base_url())).unwrap())
        .build()
        .unwrap()
}

pub fn mock_quote<'a>(server: &'a MockServer, symbol: &str, codes: &str, body: &str) -> Mock<'a> {
    let (symbol, codes, body) = (symbol.to_string(), codes.to_string(), body.to_string());
    server.mock(move |when, then| {
        when.method(GET)
            .path("/d/quotes.csv")
            .query_param("s", symbol.as_str())
            .query_param("f", codes.as_str());
        then.status(200)
            .header("content-type", "application/octet-stream")
            .body(body);
    })
}

/// The five separator-carrying fields, each answered by its own mock.
pub fn mock_separate_fields<'a>(server: &'a MockServer, symbol: &str) -> Vec<Mock<'a>> {
    [
        ("f6", "1,203,456,000"),
        ("j2", "1,234,567"),
        ("a5", "300"),
        ("b6", "1,100"),
        ("k3", "2,500"),
    ]
    .into_iter()
    .map(|(code, body)| mock_quote(server, symbol, code, body))
    .collect()
}

pub fn mock_history<'a>(server: &'a MockServer, symbol: &str, body: &str) -> Mock<'a> {
    let (symbol, body) = (symbol.to_string(), body.to_string());
    server.mock(move |when, then| {
        when.method(GET).path("/table.csv").query_param("s", symbol.as_str());
        then.status(200).header("content-type", "text/csv").body(body);
    })
}

pub const BULK_CODES: &str = concat!(
    "ydb2r1b3qpoc1d1",
    "cd2c6t1k2p2c8m5gm7",
    "hm8k1m3lm4l1t8w1g1",
    "w4g3p1mg5m2kjj1j5",
    "j3k4j6nk5n4ws1xv",
    "t7a2t6i5l2el3e7v1e8",
    "v7e9s6b4j4p5p6rr2r5",
    "r6r7s7g4g6",
);
