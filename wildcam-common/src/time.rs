//! Timestamp utilities and time-range resolution

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// Get current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Symbolic capture-time window used to narrow image listings
///
/// Tokens are case-sensitive: `1D`, `7D`, `1M`, `3M`, `1YR`, `All`.
/// Anything else behaves as [`TimeRange::All`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeRange {
    OneDay,
    SevenDays,
    OneMonth,
    ThreeMonths,
    OneYear,
    #[default]
    All,
}

impl TimeRange {
    /// Parse a range token; unknown tokens fall back to `All` without error
    pub fn from_token(token: &str) -> Self {
        match token {
            "1D" => TimeRange::OneDay,
            "7D" => TimeRange::SevenDays,
            "1M" => TimeRange::OneMonth,
            "3M" => TimeRange::ThreeMonths,
            "1YR" => TimeRange::OneYear,
            _ => TimeRange::All,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::OneDay => "1D",
            TimeRange::SevenDays => "7D",
            TimeRange::OneMonth => "1M",
            TimeRange::ThreeMonths => "3M",
            TimeRange::OneYear => "1YR",
            TimeRange::All => "All",
        }
    }

    /// Length of the window, `None` when unbounded
    ///
    /// Months and years are fixed day counts (30, 90, 365), not calendar units.
    pub fn span(&self) -> Option<Duration> {
        match self {
            TimeRange::OneDay => Some(Duration::days(1)),
            TimeRange::SevenDays => Some(Duration::days(7)),
            TimeRange::OneMonth => Some(Duration::days(30)),
            TimeRange::ThreeMonths => Some(Duration::days(90)),
            TimeRange::OneYear => Some(Duration::days(365)),
            TimeRange::All => None,
        }
    }

    /// Earliest capture time admitted by this window, relative to `reference`
    pub fn lower_bound_at(&self, reference: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.span().map(|span| reference - span)
    }

    /// Earliest capture time admitted by this window, relative to now
    pub fn lower_bound(&self) -> Option<DateTime<Utc>> {
        self.lower_bound_at(now())
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
