#[cfg(feature = "test-mode")]
use std::env;

use url::Url;

use crate::core::{YqClient, YqError};

/// Read the response body as text.
/// In `test-mode`, if `YQ_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("YQ_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &text)
        {
            eprintln!("YQ_RECORD: failed to write fixture for {_key}: {e}");
        }
    }

    Ok(text)
}

/// Issue one GET and return the body text. Non-2xx statuses become [`YqError::Status`].
pub(crate) async fn get_body(
    client: &YqClient,
    url: Url,
    endpoint: &str,
    key: &str,
) -> Result<String, YqError> {
    #[cfg(feature = "tracing")]
    tracing::debug!(%url, "GET");

    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(YqError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    Ok(get_text(resp, endpoint, key, "csv").await?)
}

/// Fetch raw quote data: `s=<symbol>&f=<codes>` against the quote CSV endpoint.
///
/// `codes` is the concatenation of one or more field codes with no separator. The
/// body is returned with surrounding whitespace trimmed and is otherwise untouched.
pub async fn fetch_quote_csv(client: &YqClient, symbol: &str, codes: &str) -> Result<String, YqError> {
    fetch_quote_csv_as(client, symbol, codes, codes).await
}

/// Like [`fetch_quote_csv`], recording the body as `quotes_csv_<symbol>_<fixture>.csv`
/// in `test-mode`.
pub(crate) async fn fetch_quote_csv_as(
    client: &YqClient,
    symbol: &str,
    codes: &str,
    fixture: &str,
) -> Result<String, YqError> {
    let mut url = client.base_quote_csv().clone();
    url.query_pairs_mut()
        .append_pair("s", symbol)
        .append_pair("f", codes);

    let key = format!("{symbol}_{fixture}");
    let body = get_body(client, url, "quotes_csv", &key).await?;
    Ok(body.trim().to_string())
}
