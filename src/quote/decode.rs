use crate::core::YqError;

use super::fields::Field;

/// Split a quote response on `,` and pair each value with the field at the same position.
///
/// `fields` must be the exact list (and order) whose codes were sent in the request.
/// A value count that differs from `fields.len()` means the response no longer
/// matches the request and is reported as [`YqError::FieldCount`].
pub fn decode_quote_csv(body: &str, fields: &[Field]) -> Result<Vec<(Field, String)>, YqError> {
    let values: Vec<&str> = body.trim().split(',').collect();

    if values.len() != fields.len() {
        #[cfg(feature = "tracing")]
        tracing::warn!(
            expected = fields.len(),
            found = values.len(),
            "quote response does not match requested fields"
        );
        return Err(YqError::FieldCount {
            expected: fields.len(),
            found: values.len(),
        });
    }

    Ok(fields
        .iter()
        .copied()
        .zip(values.into_iter().map(str::to_string))
        .collect())
}

/// Drop every `,` from a single-field value (`"1,234,567"` -> `"1234567"`).
#[must_use]
pub fn strip_grouping(raw: &str) -> String {
    raw.chars().filter(|c| *c != ',').collect()
}
