use chrono::{Datelike, NaiveDate};

use crate::core::YqError;

/// Bar size requested from the historical endpoint (`g` parameter).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interval {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Interval {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Interval::Daily => "d",
            Interval::Weekly => "w",
            Interval::Monthly => "m",
        }
    }
}

/// Parse a `YYYY-MM-DD` date argument.
///
/// # Errors
///
/// Returns [`YqError::InvalidDate`] if `s` is not a valid calendar date in that form.
/// Month and day must be zero-padded (`2013-01-03`, not `2013-1-3`).
pub fn parse_date(s: &str) -> Result<NaiveDate, YqError> {
    let t = s.trim();
    if t.len() != 10 {
        return Err(YqError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d").map_err(|_| YqError::InvalidDate(s.to_string()))
}

/// Query pairs for a range: `a`/`b`/`c` start and `d`/`e`/`f` end, each as
/// zero-based month, day and year.
pub(crate) fn range_pairs(start: NaiveDate, end: NaiveDate) -> [(&'static str, String); 6] {
    [
        ("a", start.month0().to_string()),
        ("b", start.day().to_string()),
        ("c", start.year().to_string()),
        ("d", end.month0().to_string()),
        ("e", end.day().to_string()),
        ("f", end.year().to_string()),
    ]
}
