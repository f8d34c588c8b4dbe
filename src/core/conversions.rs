//! Typed views over raw quote strings.
//!
//! Decoding never calls into this module; callers opt in per value. Every function
//! returns `None` for the service's "not available" placeholders (`N/A`, `-`, empty)
//! as well as for text it cannot read, so a sentinel never turns into an error here.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Strip one pair of surrounding double quotes (`"Apple Inc."` -> `Apple Inc.`).
#[must_use]
pub fn unquote(raw: &str) -> &str {
    let t = raw.trim();
    t.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(t)
}

/// Whether `raw` is one of the service's placeholders for a missing value.
#[must_use]
pub fn is_not_available(raw: &str) -> bool {
    matches!(unquote(raw), "" | "N/A" | "-")
}

/// Parse a plain number such as `"123.45"`, `"+0.52"` or `"1,234.5"`.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    if is_not_available(raw) {
        return None;
    }
    let cleaned: String = unquote(raw).chars().filter(|c| *c != ',').collect();
    let digits = cleaned.strip_prefix('+').unwrap_or(&cleaned);
    Decimal::from_str(digits).ok()
}

/// Parse a percentage such as `"+1.25%"` into `1.25`.
#[must_use]
pub fn parse_percent(raw: &str) -> Option<Decimal> {
    parse_decimal(unquote(raw).trim_end_matches('%'))
}

/// Parse an abbreviated magnitude such as `"2.53T"`, `"812.4B"`, `"15.2M"` or `"900K"`.
///
/// Values without a suffix are parsed as plain numbers.
#[must_use]
pub fn parse_scaled(raw: &str) -> Option<Decimal> {
    let t = unquote(raw);
    let (digits, scale): (&str, i64) = match t.chars().last()? {
        'K' | 'k' => (&t[..t.len() - 1], 1_000),
        'M' | 'm' => (&t[..t.len() - 1], 1_000_000),
        'B' | 'b' => (&t[..t.len() - 1], 1_000_000_000),
        'T' | 't' => (&t[..t.len() - 1], 1_000_000_000_000),
        _ => (t, 1),
    };
    parse_decimal(digits)?.checked_mul(Decimal::from(scale))
}

/// Parse a share or volume count, tolerating grouping separators (`"1,234,567"`).
#[must_use]
pub fn parse_volume(raw: &str) -> Option<u64> {
    if is_not_available(raw) {
        return None;
    }
    let cleaned: String = unquote(raw).chars().filter(|c| *c != ',').collect();
    cleaned.parse().ok()
}

/// Parse a quote date: `"10/17/2026"` (the quote endpoint) or `"2026-10-17"`.
#[must_use]
pub fn parse_quote_date(raw: &str) -> Option<NaiveDate> {
    if is_not_available(raw) {
        return None;
    }
    let t = unquote(raw);
    NaiveDate::parse_from_str(t, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(t, "%Y-%m-%d"))
        .ok()
}

/// Parse a `"low - high"` pair such as the day's or 52-week range.
///
/// A trailing `%` on either side is ignored, so change pairs like
/// `"+0.52 - +0.30%"` read as `(0.52, 0.30)`.
#[must_use]
pub fn parse_range(raw: &str) -> Option<(Decimal, Decimal)> {
    let (lo, hi) = unquote(raw).split_once(" - ")?;
    let side = |s: &str| parse_decimal(s.trim().trim_end_matches('%'));
    Some((side(lo)?, side(hi)?))
}
