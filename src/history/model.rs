use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::conversions::{parse_decimal, parse_volume};
use crate::core::YqError;

/// One line of the historical CSV: column name (from the header) to raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    columns: Vec<(String, String)>,
}

impl HistoryRow {
    pub(crate) fn new(columns: Vec<(String, String)>) -> Self {
        Self { columns }
    }

    /// The raw value of `column` (e.g. `"Close"`, `"Adj Close"`).
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(k, _)| k == column)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate `(column, raw value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of value columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no value columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    fn required(&self, column: &str) -> Result<&str, YqError> {
        self.columns
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(column))
            .map(|(_, v)| v.as_str())
            .ok_or_else(|| YqError::Parse(format!("missing column {column}")))
    }

    /// Convert the raw row into a typed [`Candle`].
    ///
    /// Columns are matched case-insensitively against the conventional header names
    /// (`Open`, `High`, `Low`, `Close`, `Volume`, `Adj Close`).
    ///
    /// # Errors
    ///
    /// Returns [`YqError::Parse`] if the date, a column, or a value cannot be read.
    pub fn to_candle(&self, date: &str) -> Result<Candle, YqError> {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| YqError::Parse(format!("date {date}: {e}")))?;

        let price = |column: &str| -> Result<Decimal, YqError> {
            let raw = self.required(column)?;
            parse_decimal(raw).ok_or_else(|| YqError::Parse(format!("{column} = {raw:?}")))
        };
        let raw_volume = self.required("Volume")?;

        Ok(Candle {
            date,
            open: price("Open")?,
            high: price("High")?,
            low: price("Low")?,
            close: price("Close")?,
            volume: parse_volume(raw_volume)
                .ok_or_else(|| YqError::Parse(format!("Volume = {raw_volume:?}")))?,
            adj_close: price("Adj Close")?,
        })
    }
}

impl Serialize for HistoryRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (k, v) in &self.columns {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// A typed daily (or weekly / monthly) bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
    pub adj_close: Decimal,
}

/// Historical prices for one symbol, keyed by `YYYY-MM-DD` date string.
///
/// Dates keep the order of the response (newest first for this endpoint). Inserting a
/// date that is already present replaces its row in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoricalSeries {
    symbol: String,
    rows: Vec<(String, HistoryRow)>,
    index: HashMap<String, usize>,
}

impl HistoricalSeries {
    pub(crate) fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub(crate) fn insert(&mut self, date: String, row: HistoryRow) {
        if let Some(&i) = self.index.get(&date) {
            #[cfg(feature = "tracing")]
            tracing::debug!(%date, "duplicate date in history response, keeping the later row");
            self.rows[i].1 = row;
            return;
        }
        self.index.insert(date.clone(), self.rows.len());
        self.rows.push((date, row));
    }

    /// The symbol the series was fetched for.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The row for `date` (`YYYY-MM-DD`).
    pub fn get(&self, date: &str) -> Option<&HistoryRow> {
        self.index.get(date).map(|&i| &self.rows[i].1)
    }

    /// Number of dates in the series.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the range held no trading days.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Dates in response order.
    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(d, _)| d.as_str())
    }

    /// Iterate `(date, row)` pairs in response order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &HistoryRow)> {
        self.rows.iter().map(|(d, r)| (d.as_str(), r))
    }

    /// Convert every row into a [`Candle`], in response order.
    ///
    /// # Errors
    ///
    /// Fails on the first row that cannot be converted.
    pub fn candles(&self) -> Result<Vec<Candle>, YqError> {
        self.rows.iter().map(|(d, r)| r.to_candle(d)).collect()
    }
}

impl Serialize for HistoricalSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (date, row) in &self.rows {
            map.serialize_entry(date, row)?;
        }
        map.end()
    }
}
