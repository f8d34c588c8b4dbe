//! Public client surface + builder.
//! Default endpoints and the UA live in `constants`.

mod constants;

use crate::core::YqError;
use constants::{DEFAULT_BASE_HISTORY_CSV, DEFAULT_BASE_QUOTE_CSV, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// The entry point for all requests.
///
/// A client holds the HTTP connection pool and the two endpoint bases. It carries no
/// per-request state, so cloning it and sharing it across tasks is cheap and safe.
#[derive(Debug, Clone)]
pub struct YqClient {
    http: Client,
    base_quote_csv: Url,
    base_history_csv: Url,
}

impl Default for YqClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl YqClient {
    /// Create a new builder.
    pub fn builder() -> YqClientBuilder {
        YqClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_quote_csv(&self) -> &Url {
        &self.base_quote_csv
    }
    pub(crate) fn base_history_csv(&self) -> &Url {
        &self.base_history_csv
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct YqClientBuilder {
    user_agent: Option<String>,
    base_quote_csv: Option<Url>,
    base_history_csv: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl YqClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the quote CSV endpoint (e.g., `http://download.finance.yahoo.com/d/quotes.csv`).
    pub fn base_quote_csv(mut self, url: Url) -> Self {
        self.base_quote_csv = Some(url);
        self
    }

    /// Override the historical price endpoint (e.g., `http://ichart.yahoo.com/table.csv`).
    pub fn base_history_csv(mut self, url: Url) -> Self {
        self.base_history_csv = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if a default URL fails to parse or the HTTP client cannot be
    /// constructed.
    pub fn build(self) -> Result<YqClient, YqError> {
        let base_quote_csv = match self.base_quote_csv {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE_CSV)?,
        };
        let base_history_csv = match self.base_history_csv {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_HISTORY_CSV)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(YqClient {
            http,
            base_quote_csv,
            base_history_csv,
        })
    }
}
