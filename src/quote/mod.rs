//! Quote snapshots from the CSV quote endpoint.
//!
//! [`get`] fetches one attribute, [`get_fields`] an arbitrary ordered set and
//! [`get_all`] every attribute the endpoint offers.

mod decode;
mod fields;
mod model;

pub use decode::{decode_quote_csv, strip_grouping};
pub use fields::{ALL_FIELDS, BULK_FIELDS, Field, SEPARATE_FIELDS, codes_for};
pub use model::QuoteRecord;

use std::collections::HashMap;

use crate::core::net::{fetch_quote_csv, fetch_quote_csv_as};
use crate::core::{YqClient, YqError};

/* ---------------- Public API ---------------- */

/// Fetch a single attribute for `symbol`.
///
/// The value is returned exactly as the service sent it (trimmed), so fields such as
/// [`Field::SharesOutstanding`] keep their grouping separators here.
///
/// # Errors
///
/// Returns an error if the request fails or the server answers with a non-2xx status.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn get(client: &YqClient, symbol: &str, field: Field) -> Result<String, YqError> {
    fetch_quote_csv(client, symbol, field.code()).await
}

/// Like [`get`], looking the field up by its attribute name (e.g. `"dividend_yield"`).
///
/// # Errors
///
/// Returns [`YqError::UnknownField`] for names outside the field table, otherwise the
/// same errors as [`get`].
pub async fn get_by_name(client: &YqClient, symbol: &str, name: &str) -> Result<String, YqError> {
    let field: Field = name.parse()?;
    get(client, symbol, field).await
}

/// Fetch every known bulk and separator-carrying attribute for `symbol`.
///
/// One request covers [`BULK_FIELDS`]; each of [`SEPARATE_FIELDS`] is fetched with a
/// request of its own and has its `,` separators removed. The record lists the bulk
/// fields first, in table order, followed by the separate ones.
///
/// # Errors
///
/// Returns an error if any request fails or if the bulk response does not carry
/// exactly one value per requested field.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn get_all(client: &YqClient, symbol: &str) -> Result<QuoteRecord, YqError> {
    let fields: Vec<Field> = BULK_FIELDS
        .iter()
        .chain(SEPARATE_FIELDS.iter())
        .copied()
        .collect();
    get_fields(client, symbol, &fields).await
}

/// Fetch an ordered set of attributes for `symbol`.
///
/// Fields without grouping separators share one positional request whose code
/// string is generated from `fields` itself; a single such field is stored whole.
/// Fields that may contain `,` are fetched one by one and stripped of separators.
/// Duplicates are requested once. The record keeps the order of `fields`.
///
/// # Errors
///
/// Returns [`YqError::Data`] if `fields` is empty, [`YqError::FieldCount`] on a
/// response/request mismatch, or the underlying transport error.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn get_fields(
    client: &YqClient,
    symbol: &str,
    fields: &[Field],
) -> Result<QuoteRecord, YqError> {
    if fields.is_empty() {
        return Err(YqError::Data("quote: at least one field required".into()));
    }

    let mut wanted: Vec<Field> = Vec::with_capacity(fields.len());
    for f in fields {
        if !wanted.contains(f) {
            wanted.push(*f);
        }
    }

    let positional: Vec<Field> = wanted
        .iter()
        .copied()
        .filter(|f| !f.has_grouping_separators())
        .collect();

    let mut values: HashMap<Field, String> = HashMap::with_capacity(wanted.len());

    match positional.as_slice() {
        [] => {}
        // A lone field has nothing to split, so commas inside it are kept.
        [only] => {
            let body = fetch_quote_csv(client, symbol, only.code()).await?;
            values.insert(*only, body);
        }
        _ => {
            let codes = codes_for(&positional);
            let fixture = if positional == BULK_FIELDS { "bulk" } else { codes.as_str() };
            let body = fetch_quote_csv_as(client, symbol, &codes, fixture).await?;
            values.extend(decode_quote_csv(&body, &positional)?);
        }
    }

    for field in wanted.iter().copied().filter(|f| f.has_grouping_separators()) {
        let body = fetch_quote_csv(client, symbol, field.code()).await?;
        values.insert(field, strip_grouping(&body));
    }

    let mut record = QuoteRecord::new(symbol, Vec::with_capacity(wanted.len()));
    for field in wanted {
        if let Some(v) = values.remove(&field) {
            record.push(field, v);
        }
    }
    Ok(record)
}
