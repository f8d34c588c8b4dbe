use chrono::NaiveDate;

use crate::core::net::get_body;
use crate::core::{YqClient, YqError};

use super::decode::decode_history_csv;
use super::model::HistoricalSeries;
use super::params::{Interval, range_pairs};

/// A builder for fetching historical prices for a single symbol.
#[derive(Clone)]
pub struct HistoryBuilder {
    #[doc(hidden)]
    pub(crate) client: YqClient,
    #[doc(hidden)]
    pub(crate) symbol: String,
    #[doc(hidden)]
    pub(crate) period: Option<(NaiveDate, NaiveDate)>,
    #[doc(hidden)]
    pub(crate) interval: Interval,
}

impl HistoryBuilder {
    /// Creates a new `HistoryBuilder` for a given symbol. Daily bars, no range yet.
    pub fn new(client: &YqClient, symbol: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            symbol: symbol.into(),
            period: None,
            interval: Interval::Daily,
        }
    }

    /// Sets the inclusive date range. Start after end is passed through unchecked.
    pub fn between(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.period = Some((start, end));
        self
    }

    /// Sets the bar size. (Default: daily)
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Execute the request.
    ///
    /// # Errors
    ///
    /// Returns [`YqError::Data`] if no range was set or the body is malformed, and the
    /// transport / status errors of the request itself.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(self) -> Result<HistoricalSeries, YqError> {
        let (start, end) = self
            .period
            .ok_or_else(|| YqError::Data("no date range set".into()))?;

        let mut url = self.client.base_history_csv().clone();
        {
            let mut qp = url.query_pairs_mut();
            qp.append_pair("s", &self.symbol);
            for (k, v) in range_pairs(start, end) {
                qp.append_pair(k, &v);
            }
            qp.append_pair("g", self.interval.as_str());
            qp.append_pair("ignore", ".csv");
        }

        let body = get_body(&self.client, url, "table_csv", &self.symbol).await?;
        decode_history_csv(&self.symbol, &body)
    }
}
