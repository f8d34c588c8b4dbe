use chrono::NaiveDate;

use crate::core::{YqClient, YqError};
use crate::history::{HistoricalSeries, HistoryBuilder, Interval};
use crate::quote::{self, Field, QuoteRecord};

/// A single symbol bound to a client.
///
/// Every method performs its own request(s); nothing is cached between calls.
///
/// # Example
///
/// ```no_run
/// # use ystockquote::{Field, Ticker, YqClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = YqClient::default();
/// let ticker = Ticker::new(&client, "GOOG");
///
/// let price = ticker.get(Field::LastTradePrice).await?;
/// let yield_ = ticker.get_by_name("dividend_yield").await?;
/// let all = ticker.all().await?;
/// println!("{price} {yield_} {:?}", all.get(Field::FiftytwoWeekRange));
/// # Ok(())
/// # }
/// ```
pub struct Ticker {
    client: YqClient,
    symbol: String,
}

impl Ticker {
    /// Creates a new `Ticker` for a given symbol.
    pub fn new(client: &YqClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Fetches one attribute, verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, field: Field) -> Result<String, YqError> {
        quote::get(&self.client, &self.symbol, field).await
    }

    /// Fetches one attribute by its name (e.g. `"fiftytwo_week_range"`).
    ///
    /// # Errors
    ///
    /// Returns [`YqError::UnknownField`] for unknown names or the request error.
    pub async fn get_by_name(&self, name: &str) -> Result<String, YqError> {
        quote::get_by_name(&self.client, &self.symbol, name).await
    }

    /// Fetches every attribute. See [`quote::get_all`].
    ///
    /// # Errors
    ///
    /// Returns an error if a request fails or the bulk response is misaligned.
    pub async fn all(&self) -> Result<QuoteRecord, YqError> {
        quote::get_all(&self.client, &self.symbol).await
    }

    /// Fetches the given attributes. See [`quote::get_fields`].
    ///
    /// # Errors
    ///
    /// Returns an error if a request fails or the response is misaligned.
    pub async fn fields(&self, fields: &[Field]) -> Result<QuoteRecord, YqError> {
        quote::get_fields(&self.client, &self.symbol, fields).await
    }

    /// Fetches daily history for an inclusive date range.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the CSV is malformed.
    pub async fn history(&self, start: NaiveDate, end: NaiveDate) -> Result<HistoricalSeries, YqError> {
        self.history_builder().between(start, end).fetch().await
    }

    /// Fetches history for a range with a specific bar size.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the CSV is malformed.
    pub async fn history_with_interval(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        interval: Interval,
    ) -> Result<HistoricalSeries, YqError> {
        self.history_builder()
            .between(start, end)
            .interval(interval)
            .fetch()
            .await
    }

    fn history_builder(&self) -> HistoryBuilder {
        HistoryBuilder::new(&self.client, self.symbol.clone())
    }
}
