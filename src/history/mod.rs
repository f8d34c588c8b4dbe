//! Historical prices from the CSV table endpoint.

mod builder;
mod decode;
mod model;
mod params;

pub use builder::HistoryBuilder;
pub use decode::decode_history_csv;
pub use model::{Candle, HistoricalSeries, HistoryRow};
pub use params::{Interval, parse_date};

use crate::core::{YqClient, YqError};

/// Fetch daily prices for `symbol` between two `YYYY-MM-DD` dates (inclusive).
///
/// The result is keyed by date string; each row maps the header columns of the
/// response (Open, High, Low, Close, Volume, Adj Close) to their raw values. A range
/// without trading days yields an empty series.
///
/// # Errors
///
/// Returns [`YqError::InvalidDate`] for malformed dates, otherwise the errors of
/// [`HistoryBuilder::fetch`].
pub async fn get_historical_prices(
    client: &YqClient,
    symbol: &str,
    start_date: &str,
    end_date: &str,
) -> Result<HistoricalSeries, YqError> {
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;
    HistoryBuilder::new(client, symbol)
        .between(start, end)
        .fetch()
        .await
}
