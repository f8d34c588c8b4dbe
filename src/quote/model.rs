use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::fields::Field;

/// Raw quote values for one symbol, keyed by field.
///
/// Values are the untouched strings the service returned (including placeholders such
/// as `N/A`); see [`crate::conversions`] for typed parsing. Entries keep the order in
/// which the fields were requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteRecord {
    symbol: String,
    values: Vec<(Field, String)>,
}

impl QuoteRecord {
    pub(crate) fn new(symbol: impl Into<String>, values: Vec<(Field, String)>) -> Self {
        Self {
            symbol: symbol.into(),
            values,
        }
    }

    pub(crate) fn push(&mut self, field: Field, value: String) {
        self.values.push((field, value));
    }

    /// The symbol the record was fetched for.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The raw value of `field`, if it was part of the request.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, v)| v.as_str())
    }

    /// The raw value stored under the attribute name (e.g. `"previous_close"`).
    pub fn get_by_name(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(f, _)| f.name() == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record holds no fields.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(field, raw value)` pairs in request order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.values.iter().map(|(f, v)| (*f, v.as_str()))
    }

    /// Flatten into a `name -> value` map.
    pub fn to_map(&self) -> HashMap<&'static str, String> {
        self.values
            .iter()
            .map(|(f, v)| (f.name(), v.clone()))
            .collect()
    }
}

impl Serialize for QuoteRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (field, value) in &self.values {
            map.serialize_entry(field.name(), value)?;
        }
        map.end()
    }
}
