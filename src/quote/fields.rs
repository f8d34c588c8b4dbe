//! The field vocabulary of the quote endpoint.
//!
//! Every attribute the service understands is one [`Field`] variant carrying its wire
//! code and its snake_case name. [`BULK_FIELDS`] fixes the order of the bulk query: the
//! request code string and the positional decode are both generated from it, so the
//! two cannot drift apart.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::core::YqError;

/// One quote attribute understood by the remote service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Field {
    /// `y`
    DividendYield,
    /// `d`
    DividendPerShare,
    /// `b2`
    AskRealtime,
    /// `r1`
    DividendPayDate,
    /// `b3`
    BidRealtime,
    /// `q`
    ExDividendDate,
    /// `p`
    PreviousClose,
    /// `o`
    TodayOpen,
    /// `c1`
    Change,
    /// `d1`
    LastTradeDate,
    /// `c`
    ChangePercentChange,
    /// `d2`
    TradeDate,
    /// `c6`
    ChangeRealtime,
    /// `t1`
    LastTradeTime,
    /// `k2`
    ChangePercentRealtime,
    /// `p2`
    ChangePercent,
    /// `c8`
    AfterHoursChangeRealtime,
    /// `m5`
    Change200Sma,
    /// `g`
    TodaysLow,
    /// `m7`
    Change50Sma,
    /// `h`
    TodaysHigh,
    /// `m8`
    PercentChange50Sma,
    /// `k1`
    LastTradeRealtimeTime,
    /// `m3`
    FiftySma,
    /// `l`
    LastTradeTimePlus,
    /// `m4`
    TwohundredSma,
    /// `l1`
    LastTradePrice,
    /// `t8`
    OneYearTarget,
    /// `w1`
    TodaysValueChange,
    /// `g1`
    HoldingsGainPercent,
    /// `w4`
    TodaysValueChangeRealtime,
    /// `g3`
    AnnualizedGain,
    /// `p1`
    PricePaid,
    /// `m`
    TodaysRange,
    /// `g5`
    HoldingsGainPercentRealtime,
    /// `m2`
    TodaysRangeRealtime,
    /// `k`
    FiftytwoWeekHigh,
    /// `j`
    FiftytwoWeekLow,
    /// `j1`
    MarketCap,
    /// `j5`
    ChangeFrom52WeekLow,
    /// `j3`
    MarketCapRealtime,
    /// `k4`
    ChangeFrom52WeekHigh,
    /// `j6`
    PercentChangeFrom52WeekLow,
    /// `n`
    CompanyName,
    /// `k5`
    PercentChangeFrom52WeekHigh,
    /// `n4`
    Notes,
    /// `w`
    FiftytwoWeekRange,
    /// `s1`
    SharesOwned,
    /// `x`
    StockExchange,
    /// `v`
    Volume,
    /// `t7`
    TickerTrend,
    /// `a2`
    AverageDailyVolume,
    /// `t6`
    TradeLinks,
    /// `i5`
    OrderBookRealtime,
    /// `l2`
    HighLimit,
    /// `e`
    Eps,
    /// `l3`
    LowLimit,
    /// `e7`
    EpsEstimateCurrentYear,
    /// `v1`
    HoldingsValue,
    /// `e8`
    EpsEstimateNextYear,
    /// `v7`
    HoldingsValueRealtime,
    /// `e9`
    EpsEstimateNextQuarter,
    /// `s6`
    Revenue,
    /// `b4`
    BookValue,
    /// `j4`
    Ebitda,
    /// `p5`
    PriceSales,
    /// `p6`
    PriceBook,
    /// `r`
    Pe,
    /// `r2`
    PeRealtime,
    /// `r5`
    Peg,
    /// `r6`
    PriceEpsEstimateCurrentYear,
    /// `r7`
    PriceEpsEstimateNextYear,
    /// `s7`
    ShortRatio,
    /// `g4`
    HoldingsGain,
    /// `g6`
    HoldingsGainRealtime,
    /// `f6`
    FloatShares,
    /// `j2`
    SharesOutstanding,
    /// `a5`
    AskSize,
    /// `b6`
    BidSize,
    /// `k3`
    LastTradeSize,
    /// `c3`
    Commission,
    /// `m6`
    PercentChange200Sma,
    /// `i`
    MoreInfo,
}

/// Fields requested together by the bulk query, in request order.
pub const BULK_FIELDS: [Field; 75] = [
    Field::DividendYield,
    Field::DividendPerShare,
    Field::AskRealtime,
    Field::DividendPayDate,
    Field::BidRealtime,
    Field::ExDividendDate,
    Field::PreviousClose,
    Field::TodayOpen,
    Field::Change,
    Field::LastTradeDate,
    Field::ChangePercentChange,
    Field::TradeDate,
    Field::ChangeRealtime,
    Field::LastTradeTime,
    Field::ChangePercentRealtime,
    Field::ChangePercent,
    Field::AfterHoursChangeRealtime,
    Field::Change200Sma,
    Field::TodaysLow,
    Field::Change50Sma,
    Field::TodaysHigh,
    Field::PercentChange50Sma,
    Field::LastTradeRealtimeTime,
    Field::FiftySma,
    Field::LastTradeTimePlus,
    Field::TwohundredSma,
    Field::LastTradePrice,
    Field::OneYearTarget,
    Field::TodaysValueChange,
    Field::HoldingsGainPercent,
    Field::TodaysValueChangeRealtime,
    Field::AnnualizedGain,
    Field::PricePaid,
    Field::TodaysRange,
    Field::HoldingsGainPercentRealtime,
    Field::TodaysRangeRealtime,
    Field::FiftytwoWeekHigh,
    Field::FiftytwoWeekLow,
    Field::MarketCap,
    Field::ChangeFrom52WeekLow,
    Field::MarketCapRealtime,
    Field::ChangeFrom52WeekHigh,
    Field::PercentChangeFrom52WeekLow,
    Field::CompanyName,
    Field::PercentChangeFrom52WeekHigh,
    Field::Notes,
    Field::FiftytwoWeekRange,
    Field::SharesOwned,
    Field::StockExchange,
    Field::Volume,
    Field::TickerTrend,
    Field::AverageDailyVolume,
    Field::TradeLinks,
    Field::OrderBookRealtime,
    Field::HighLimit,
    Field::Eps,
    Field::LowLimit,
    Field::EpsEstimateCurrentYear,
    Field::HoldingsValue,
    Field::EpsEstimateNextYear,
    Field::HoldingsValueRealtime,
    Field::EpsEstimateNextQuarter,
    Field::Revenue,
    Field::BookValue,
    Field::Ebitda,
    Field::PriceSales,
    Field::PriceBook,
    Field::Pe,
    Field::PeRealtime,
    Field::Peg,
    Field::PriceEpsEstimateCurrentYear,
    Field::PriceEpsEstimateNextYear,
    Field::ShortRatio,
    Field::HoldingsGain,
    Field::HoldingsGainRealtime,
];

/// Fields whose values may contain `,` as a thousands separator.
///
/// These are never part of a positional multi-field request; each one is fetched on
/// its own and the separators are removed.
pub const SEPARATE_FIELDS: [Field; 5] = [
    Field::FloatShares,
    Field::SharesOutstanding,
    Field::AskSize,
    Field::BidSize,
    Field::LastTradeSize,
];

/// Every known field.
pub const ALL_FIELDS: [Field; 83] = [
    Field::DividendYield,
    Field::DividendPerShare,
    Field::AskRealtime,
    Field::DividendPayDate,
    Field::BidRealtime,
    Field::ExDividendDate,
    Field::PreviousClose,
    Field::TodayOpen,
    Field::Change,
    Field::LastTradeDate,
    Field::ChangePercentChange,
    Field::TradeDate,
    Field::ChangeRealtime,
    Field::LastTradeTime,
    Field::ChangePercentRealtime,
    Field::ChangePercent,
    Field::AfterHoursChangeRealtime,
    Field::Change200Sma,
    Field::TodaysLow,
    Field::Change50Sma,
    Field::TodaysHigh,
    Field::PercentChange50Sma,
    Field::LastTradeRealtimeTime,
    Field::FiftySma,
    Field::LastTradeTimePlus,
    Field::TwohundredSma,
    Field::LastTradePrice,
    Field::OneYearTarget,
    Field::TodaysValueChange,
    Field::HoldingsGainPercent,
    Field::TodaysValueChangeRealtime,
    Field::AnnualizedGain,
    Field::PricePaid,
    Field::TodaysRange,
    Field::HoldingsGainPercentRealtime,
    Field::TodaysRangeRealtime,
    Field::FiftytwoWeekHigh,
    Field::FiftytwoWeekLow,
    Field::MarketCap,
    Field::ChangeFrom52WeekLow,
    Field::MarketCapRealtime,
    Field::ChangeFrom52WeekHigh,
    Field::PercentChangeFrom52WeekLow,
    Field::CompanyName,
    Field::PercentChangeFrom52WeekHigh,
    Field::Notes,
    Field::FiftytwoWeekRange,
    Field::SharesOwned,
    Field::StockExchange,
    Field::Volume,
    Field::TickerTrend,
    Field::AverageDailyVolume,
    Field::TradeLinks,
    Field::OrderBookRealtime,
    Field::HighLimit,
    Field::Eps,
    Field::LowLimit,
    Field::EpsEstimateCurrentYear,
    Field::HoldingsValue,
    Field::EpsEstimateNextYear,
    Field::HoldingsValueRealtime,
    Field::EpsEstimateNextQuarter,
    Field::Revenue,
    Field::BookValue,
    Field::Ebitda,
    Field::PriceSales,
    Field::PriceBook,
    Field::Pe,
    Field::PeRealtime,
    Field::Peg,
    Field::PriceEpsEstimateCurrentYear,
    Field::PriceEpsEstimateNextYear,
    Field::ShortRatio,
    Field::HoldingsGain,
    Field::HoldingsGainRealtime,
    Field::FloatShares,
    Field::SharesOutstanding,
    Field::AskSize,
    Field::BidSize,
    Field::LastTradeSize,
    Field::Commission,
    Field::PercentChange200Sma,
    Field::MoreInfo,
];

impl Field {
    /// The wire code sent in the `f` query parameter.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::DividendYield => "y",
            Self::DividendPerShare => "d",
            Self::AskRealtime => "b2",
            Self::DividendPayDate => "r1",
            Self::BidRealtime => "b3",
            Self::ExDividendDate => "q",
            Self::PreviousClose => "p",
            Self::TodayOpen => "o",
            Self::Change => "c1",
            Self::LastTradeDate => "d1",
            Self::ChangePercentChange => "c",
            Self::TradeDate => "d2",
            Self::ChangeRealtime => "c6",
            Self::LastTradeTime => "t1",
            Self::ChangePercentRealtime => "k2",
            Self::ChangePercent => "p2",
            Self::AfterHoursChangeRealtime => "c8",
            Self::Change200Sma => "m5",
            Self::TodaysLow => "g",
            Self::Change50Sma => "m7",
            Self::TodaysHigh => "h",
            Self::PercentChange50Sma => "m8",
            Self::LastTradeRealtimeTime => "k1",
            Self::FiftySma => "m3",
            Self::LastTradeTimePlus => "l",
            Self::TwohundredSma => "m4",
            Self::LastTradePrice => "l1",
            Self::OneYearTarget => "t8",
            Self::TodaysValueChange => "w1",
            Self::HoldingsGainPercent => "g1",
            Self::TodaysValueChangeRealtime => "w4",
            Self::AnnualizedGain => "g3",
            Self::PricePaid => "p1",
            Self::TodaysRange => "m",
            Self::HoldingsGainPercentRealtime => "g5",
            Self::TodaysRangeRealtime => "m2",
            Self::FiftytwoWeekHigh => "k",
            Self::FiftytwoWeekLow => "j",
            Self::MarketCap => "j1",
            Self::ChangeFrom52WeekLow => "j5",
            Self::MarketCapRealtime => "j3",
            Self::ChangeFrom52WeekHigh => "k4",
            Self::PercentChangeFrom52WeekLow => "j6",
            Self::CompanyName => "n",
            Self::PercentChangeFrom52WeekHigh => "k5",
            Self::Notes => "n4",
            Self::FiftytwoWeekRange => "w",
            Self::SharesOwned => "s1",
            Self::StockExchange => "x",
            Self::Volume => "v",
            Self::TickerTrend => "t7",
            Self::AverageDailyVolume => "a2",
            Self::TradeLinks => "t6",
            Self::OrderBookRealtime => "i5",
            Self::HighLimit => "l2",
            Self::Eps => "e",
            Self::LowLimit => "l3",
            Self::EpsEstimateCurrentYear => "e7",
            Self::HoldingsValue => "v1",
            Self::EpsEstimateNextYear => "e8",
            Self::HoldingsValueRealtime => "v7",
            Self::EpsEstimateNextQuarter => "e9",
            Self::Revenue => "s6",
            Self::BookValue => "b4",
            Self::Ebitda => "j4",
            Self::PriceSales => "p5",
            Self::PriceBook => "p6",
            Self::Pe => "r",
            Self::PeRealtime => "r2",
            Self::Peg => "r5",
            Self::PriceEpsEstimateCurrentYear => "r6",
            Self::PriceEpsEstimateNextYear => "r7",
            Self::ShortRatio => "s7",
            Self::HoldingsGain => "g4",
            Self::HoldingsGainRealtime => "g6",
            Self::FloatShares => "f6",
            Self::SharesOutstanding => "j2",
            Self::AskSize => "a5",
            Self::BidSize => "b6",
            Self::LastTradeSize => "k3",
            Self::Commission => "c3",
            Self::PercentChange200Sma => "m6",
            Self::MoreInfo => "i",
        }
    }

    /// The snake_case attribute name used as the key in a [`QuoteRecord`](crate::QuoteRecord).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DividendYield => "dividend_yield",
            Self::DividendPerShare => "dividend_per_share",
            Self::AskRealtime => "ask_realtime",
            Self::DividendPayDate => "dividend_pay_date",
            Self::BidRealtime => "bid_realtime",
            Self::ExDividendDate => "ex_dividend_date",
            Self::PreviousClose => "previous_close",
            Self::TodayOpen => "today_open",
            Self::Change => "change",
            Self::LastTradeDate => "last_trade_date",
            Self::ChangePercentChange => "change_percent_change",
            Self::TradeDate => "trade_date",
            Self::ChangeRealtime => "change_realtime",
            Self::LastTradeTime => "last_trade_time",
            Self::ChangePercentRealtime => "change_percent_realtime",
            Self::ChangePercent => "change_percent",
            Self::AfterHoursChangeRealtime => "after_hours_change_realtime",
            Self::Change200Sma => "change_200_sma",
            Self::TodaysLow => "todays_low",
            Self::Change50Sma => "change_50_sma",
            Self::TodaysHigh => "todays_high",
            Self::PercentChange50Sma => "percent_change_50_sma",
            Self::LastTradeRealtimeTime => "last_trade_realtime_time",
            Self::FiftySma => "fifty_sma",
            Self::LastTradeTimePlus => "last_trade_time_plus",
            Self::TwohundredSma => "twohundred_sma",
            Self::LastTradePrice => "last_trade_price",
            Self::OneYearTarget => "one_year_target",
            Self::TodaysValueChange => "todays_value_change",
            Self::HoldingsGainPercent => "holdings_gain_percent",
            Self::TodaysValueChangeRealtime => "todays_value_change_realtime",
            Self::AnnualizedGain => "annualized_gain",
            Self::PricePaid => "price_paid",
            Self::TodaysRange => "todays_range",
            Self::HoldingsGainPercentRealtime => "holdings_gain_percent_realtime",
            Self::TodaysRangeRealtime => "todays_range_realtime",
            Self::FiftytwoWeekHigh => "fiftytwo_week_high",
            Self::FiftytwoWeekLow => "fiftytwo_week_low",
            Self::MarketCap => "market_cap",
            Self::ChangeFrom52WeekLow => "change_from_52_week_low",
            Self::MarketCapRealtime => "market_cap_realtime",
            Self::ChangeFrom52WeekHigh => "change_from_52_week_high",
            Self::PercentChangeFrom52WeekLow => "percent_change_from_52_week_low",
            Self::CompanyName => "company_name",
            Self::PercentChangeFrom52WeekHigh => "percent_change_from_52_week_high",
            Self::Notes => "notes",
            Self::FiftytwoWeekRange => "fiftytwo_week_range",
            Self::SharesOwned => "shares_owned",
            Self::StockExchange => "stock_exchange",
            Self::Volume => "volume",
            Self::TickerTrend => "ticker_trend",
            Self::AverageDailyVolume => "average_daily_volume",
            Self::TradeLinks => "trade_links",
            Self::OrderBookRealtime => "order_book_realtime",
            Self::HighLimit => "high_limit",
            Self::Eps => "eps",
            Self::LowLimit => "low_limit",
            Self::EpsEstimateCurrentYear => "eps_estimate_current_year",
            Self::HoldingsValue => "holdings_value",
            Self::EpsEstimateNextYear => "eps_estimate_next_year",
            Self::HoldingsValueRealtime => "holdings_value_realtime",
            Self::EpsEstimateNextQuarter => "eps_estimate_next_quarter",
            Self::Revenue => "revenue",
            Self::BookValue => "book_value",
            Self::Ebitda => "ebitda",
            Self::PriceSales => "price_sales",
            Self::PriceBook => "price_book",
            Self::Pe => "pe",
            Self::PeRealtime => "pe_realtime",
            Self::Peg => "peg",
            Self::PriceEpsEstimateCurrentYear => "price_eps_estimate_current_year",
            Self::PriceEpsEstimateNextYear => "price_eps_estimate_next_year",
            Self::ShortRatio => "short_ratio",
            Self::HoldingsGain => "holdings_gain",
            Self::HoldingsGainRealtime => "holdings_gain_realtime",
            Self::FloatShares => "float_shares",
            Self::SharesOutstanding => "shares_outstanding",
            Self::AskSize => "ask_size",
            Self::BidSize => "bid_size",
            Self::LastTradeSize => "last_trade_size",
            Self::Commission => "commission",
            Self::PercentChange200Sma => "percent_change_200_sma",
            Self::MoreInfo => "more_info",
        }
    }

    /// Whether the raw value may contain `,` grouping separators.
    #[must_use]
    pub const fn has_grouping_separators(self) -> bool {
        matches!(
            self,
            Self::FloatShares
                | Self::SharesOutstanding
                | Self::AskSize
                | Self::BidSize
                | Self::LastTradeSize
        )
    }

    /// Look up a field by its wire code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        ALL_FIELDS.iter().copied().find(|f| f.code() == code)
    }
}

/// Concatenate the wire codes of `fields` in order, as the `f` parameter expects.
#[must_use]
pub fn codes_for(fields: &[Field]) -> String {
    fields.iter().map(|f| f.code()).collect()
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = YqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FIELDS
            .iter()
            .copied()
            .find(|f| f.name() == s)
            .ok_or_else(|| YqError::UnknownField(s.to_string()))
    }
}

impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
