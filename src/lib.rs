//! ystockquote: quotes and historical prices from the Yahoo Finance CSV endpoints.
//!
//! Quote attributes are requested by field code and come back as raw strings, keyed
//! by attribute name. Historical prices come back as a date-keyed series of raw rows.
//! Typed parsing is a separate, explicit step (see [`conversions`]).
//!
//! ```no_run
//! # use ystockquote::{Field, YqClient};
//! # #[tokio::main]
//! # async fn main() -> Result<(), ystockquote::YqError> {
//! let client = YqClient::default();
//!
//! let volume = ystockquote::get(&client, "GOOG", Field::Volume).await?;
//! let quote = ystockquote::get_all(&client, "GOOG").await?;
//! let history =
//!     ystockquote::get_historical_prices(&client, "GOOG", "2013-01-03", "2013-01-08").await?;
//!
//! println!("{volume} {:?} {}", quote.get(Field::PreviousClose), history.len());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod history;
pub mod quote;
pub mod ticker;

pub use crate::core::conversions;
pub use crate::core::{YqClient, YqClientBuilder, YqError};
pub use history::{
    Candle, HistoricalSeries, HistoryBuilder, HistoryRow, Interval, get_historical_prices,
};
pub use quote::{BULK_FIELDS, Field, QuoteRecord, SEPARATE_FIELDS, get, get_all, get_by_name, get_fields};
pub use ticker::Ticker;
