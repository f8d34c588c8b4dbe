use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum YqError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A quote response carried a different number of values than fields were requested.
    ///
    /// This is how schema drift on the remote side shows up; values are never
    /// assigned to names when the counts disagree.
    #[error("quote response has {found} values, expected {expected}")]
    FieldCount {
        /// Number of fields requested.
        expected: usize,
        /// Number of comma separated values received.
        found: usize,
    },

    /// No quote field is known under the given name.
    #[error("unknown quote field: {0}")]
    UnknownField(String),

    /// A date argument was not in `YYYY-MM-DD` form.
    #[error("invalid date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    /// The data received from the service was in an unexpected format.
    #[error("Data format unexpected: {0}")]
    Data(String),

    /// A raw value could not be converted to the requested type.
    #[error("cannot parse value: {0}")]
    Parse(String),
}
