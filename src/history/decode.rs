use crate::core::YqError;

use super::model::{HistoricalSeries, HistoryRow};

/// Decode the historical CSV body into a series.
///
/// The first line names the columns; every following line is `date,<values...>` and
/// its values are keyed by the header names. A header without data lines yields an
/// empty series. Blank lines are skipped and values are kept as raw strings.
///
/// # Errors
///
/// Returns [`YqError::Data`] for an empty body, a header without value columns, or a
/// data line with fewer cells than the header.
pub fn decode_history_csv(symbol: &str, body: &str) -> Result<HistoricalSeries, YqError> {
    let mut lines = body.trim().lines();

    let header_line = lines
        .next()
        .filter(|l| !l.trim().is_empty())
        .ok_or_else(|| YqError::Data("empty history response".into()))?;
    let header: Vec<&str> = header_line.split(',').map(str::trim).collect();
    if header.len() < 2 {
        return Err(YqError::Data(format!(
            "history header has no value columns: {header_line}"
        )));
    }
    let columns = &header[1..];

    let mut series = HistoricalSeries::new(symbol);
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() < header.len() {
            return Err(YqError::Data(format!(
                "history row has {} cells, header has {}: {line}",
                cells.len(),
                header.len()
            )));
        }

        let row = HistoryRow::new(
            columns
                .iter()
                .zip(&cells[1..])
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        );
        series.insert(cells[0].to_string(), row);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(symbol, rows = series.len(), "decoded history csv");

    Ok(series)
}
