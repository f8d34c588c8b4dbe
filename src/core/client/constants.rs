//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Quote CSV endpoint (`s` = symbol, `f` = concatenated field codes).
pub(crate) const DEFAULT_BASE_QUOTE_CSV: &str = "http://download.finance.yahoo.com/d/quotes.csv";

/// Historical price CSV endpoint.
pub(crate) const DEFAULT_BASE_HISTORY_CSV: &str = "http://ichart.yahoo.com/table.csv";
