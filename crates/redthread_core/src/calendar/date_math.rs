//! Calendar-day value type and pure date arithmetic.
//!
//! # Responsibility
//! - Represent a local calendar day without any time-of-day component.
//! - Provide day distance, ISO/long formatting and rollover arithmetic.
//!
//! # Invariants
//! - `CalendarDate` ordering and equality are defined on (year, month, day).
//! - Every function here is total over representable dates and never reads
//!   the clock; `CalendarDate::today_local` is the only clock access.
//! - Month/year offsets roll over (Jan 31 + 1 month = Mar 3), never clamp.
//! - ISO text round-trips only for years 0000..=9999; serde accepts exactly
//!   the strings `parse_iso` accepts.

use chrono::{Datelike, Duration, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static ISO_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").expect("valid iso date regex"));

/// Error returned when a string is not a well-formed `YYYY-MM-DD` day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// Input does not match `YYYY-MM-DD`.
    Malformed(String),
    /// Input matches the shape but names no real calendar day.
    OutOfRange(String),
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => {
                write!(f, "invalid date `{value}`; expected YYYY-MM-DD")
            }
            Self::OutOfRange(value) => write!(f, "date `{value}` does not exist"),
        }
    }
}

impl Error for DateParseError {}

/// A local calendar day: (year, month, day) with no time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Builds a date from its parts; `None` when the triple is not a real day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Samples the local clock and keeps only the calendar day.
    ///
    /// Call once per logical operation and pass the value down.
    pub fn today_local() -> Self {
        Self(Local::now().date_naive())
    }

    /// Parses a strict `YYYY-MM-DD` string.
    pub fn parse_iso(value: &str) -> Result<Self, DateParseError> {
        let caps = ISO_DATE_RE
            .captures(value)
            .ok_or_else(|| DateParseError::Malformed(value.to_string()))?;
        let part = |idx: usize| -> Result<u32, DateParseError> {
            caps.get(idx)
                .and_then(|m| m.as_str().parse::<u32>().ok())
                .ok_or_else(|| DateParseError::Malformed(value.to_string()))
        };
        let year = i32::try_from(part(1)?)
            .map_err(|_| DateParseError::Malformed(value.to_string()))?;
        Self::from_ymd(year, part(2)?, part(3)?)
            .ok_or_else(|| DateParseError::OutOfRange(value.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month number, 1..=12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month, 1..=31.
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Monday = 0 … Sunday = 6.
    pub fn weekday_from_monday(&self) -> u32 {
        self.0.weekday().num_days_from_monday()
    }

    /// First day of this date's month.
    pub fn first_of_month(&self) -> Self {
        Self(self.0.with_day(1).unwrap_or(self.0))
    }

    /// Last day of this date's month, found as the day before the 1st of the
    /// following month.
    pub fn last_of_month(&self) -> Self {
        self.first_of_month().add_months_rollover(1).add_days(-1)
    }

    /// Adds `days` calendar days, saturating at the representable range.
    pub fn add_days(&self, days: i64) -> Self {
        let shifted = Duration::try_days(days).and_then(|delta| self.0.checked_add_signed(delta));
        match shifted {
            Some(date) => Self(date),
            None => Self::saturated(days),
        }
    }

    /// Adds `months` keeping the day-of-month number and rolling any overflow
    /// into the following month (Aug 31 + 6 months = Mar 3 in 2026).
    pub fn add_months_rollover(&self, months: i64) -> Self {
        let month_index = i64::from(self.year()) * 12 + i64::from(self.month0());
        let Some(target_index) = month_index.checked_add(months) else {
            return Self::saturated(months);
        };
        let year = target_index.div_euclid(12);
        let month0 = target_index.rem_euclid(12);

        let first = i32::try_from(year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, month0 as u32 + 1, 1));
        match first {
            Some(first) => Self(first).add_days(i64::from(self.day()) - 1),
            None => Self::saturated(months),
        }
    }

    /// Adds `years` with the same rollover policy (Feb 29 + 1 year = Mar 1).
    pub fn add_years_rollover(&self, years: i64) -> Self {
        match years.checked_mul(12) {
            Some(months) => self.add_months_rollover(months),
            None => Self::saturated(years),
        }
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    fn month0(&self) -> u32 {
        self.0.month0()
    }

    fn saturated(direction: i64) -> Self {
        if direction >= 0 {
            Self(NaiveDate::MAX)
        } else {
            Self(NaiveDate::MIN)
        }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = DateParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse_iso(&value)
    }
}

impl From<CalendarDate> for String {
    fn from(value: CalendarDate) -> Self {
        to_iso_date(value)
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&to_iso_date(*self))
    }
}

impl FromStr for CalendarDate {
    type Err = DateParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse_iso(value)
    }
}

/// Signed number of whole calendar days from `a` to `b` (`b - a`).
pub fn day_distance(a: CalendarDate, b: CalendarDate) -> i64 {
    b.0.signed_duration_since(a.0).num_days()
}

/// Long form: `Saturday, October 17, 2026`.
pub fn format_long(date: CalendarDate) -> String {
    date.0.format("%A, %B %-d, %Y").to_string()
}

/// Month caption: `October 2026`.
pub fn format_month_label(date: CalendarDate) -> String {
    date.0.format("%B %Y").to_string()
}

/// Zero-padded `YYYY-MM-DD`.
///
/// Only years 0000..=9999 produce four digits; outside that range (for
/// example after saturating arithmetic) the text has a sign or extra digits,
/// no longer sorts as a date and is rejected by `parse_iso`.
pub fn to_iso_date(date: CalendarDate) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn day_distance_is_zero_for_same_day() {
        let anchor = date(2025, 10, 5);
        assert_eq!(day_distance(anchor, anchor), 0);
    }

    #[test]
    fn day_distance_is_antisymmetric() {
        let a = date(2025, 10, 5);
        let b = date(2026, 3, 29);
        assert_eq!(day_distance(a, b), -day_distance(b, a));
        assert_eq!(day_distance(a, b), 175);
    }

    #[test]
    fn day_distance_crosses_year_and_leap_boundaries() {
        assert_eq!(day_distance(date(2025, 12, 31), date(2026, 1, 1)), 1);
        assert_eq!(day_distance(date(2024, 2, 28), date(2024, 3, 1)), 2);
        assert_eq!(day_distance(date(2023, 2, 28), date(2023, 3, 1)), 1);
        assert_eq!(day_distance(date(2024, 1, 1), date(2025, 1, 1)), 366);
    }

    #[test]
    fn day_distance_counts_dst_transition_days_as_whole_days() {
        // 2026-03-08 and 2026-03-29 are DST switch days in US/EU zones.
        assert_eq!(day_distance(date(2026, 3, 7), date(2026, 3, 9)), 2);
        assert_eq!(day_distance(date(2026, 3, 28), date(2026, 3, 30)), 2);
    }

    #[test]
    fn format_long_renders_weekday_month_day_year() {
        assert_eq!(format_long(date(2025, 10, 5)), "Sunday, October 5, 2025");
        assert_eq!(format_long(date(2026, 10, 17)), "Saturday, October 17, 2026");
    }

    #[test]
    fn month_label_renders_month_and_year() {
        assert_eq!(format_month_label(date(2024, 2, 14)), "February 2024");
    }

    #[test]
    fn iso_date_is_zero_padded() {
        assert_eq!(to_iso_date(date(2026, 2, 8)), "2026-02-08");
        assert_eq!(to_iso_date(date(987, 1, 1)), "0987-01-01");
    }

    #[test]
    fn iso_parse_then_format_reproduces_input() {
        for input in ["2025-10-05", "2024-02-29", "2000-12-31", "0001-01-01"] {
            let parsed = CalendarDate::parse_iso(input).unwrap();
            assert_eq!(to_iso_date(parsed), input);
        }
    }

    #[test]
    fn iso_parse_rejects_malformed_and_impossible_days() {
        assert!(matches!(
            CalendarDate::parse_iso("2025-1-05"),
            Err(DateParseError::Malformed(_))
        ));
        assert!(matches!(
            CalendarDate::parse_iso("2025-10-05T00:00"),
            Err(DateParseError::Malformed(_))
        ));
        assert!(matches!(
            CalendarDate::parse_iso("2023-02-29"),
            Err(DateParseError::OutOfRange(_))
        ));
        assert!(matches!(
            CalendarDate::parse_iso("2025-13-01"),
            Err(DateParseError::OutOfRange(_))
        ));
    }

    #[test]
    fn month_rollover_carries_overflowing_days_forward() {
        assert_eq!(date(2025, 1, 31).add_months_rollover(1), date(2025, 3, 3));
        assert_eq!(date(2024, 1, 31).add_months_rollover(1), date(2024, 3, 2));
        assert_eq!(date(2025, 8, 31).add_months_rollover(6), date(2026, 3, 3));
        assert_eq!(date(2025, 11, 20).add_months_rollover(6), date(2026, 5, 20));
        assert_eq!(date(2025, 3, 15).add_months_rollover(-3), date(2024, 12, 15));
    }

    #[test]
    fn year_rollover_moves_leap_day_to_march_first() {
        assert_eq!(date(2024, 2, 29).add_years_rollover(1), date(2025, 3, 1));
        assert_eq!(date(2025, 11, 20).add_years_rollover(1), date(2026, 11, 20));
    }

    #[test]
    fn last_of_month_follows_leap_years() {
        assert_eq!(date(2024, 2, 10).last_of_month(), date(2024, 2, 29));
        assert_eq!(date(2023, 2, 10).last_of_month(), date(2023, 2, 28));
        assert_eq!(date(2025, 12, 1).last_of_month(), date(2025, 12, 31));
    }

    #[test]
    fn add_days_saturates_instead_of_panicking() {
        let far = date(2025, 1, 1).add_days(i64::MAX);
        assert_eq!(far.as_naive(), NaiveDate::MAX);
    }

    #[test]
    fn serde_uses_iso_strings() {
        let encoded = serde_json::to_string(&date(2025, 11, 20)).unwrap();
        assert_eq!(encoded, "\"2025-11-20\"");
        let decoded: CalendarDate = serde_json::from_str("\"2025-10-05\"").unwrap();
        assert_eq!(decoded, date(2025, 10, 5));
    }

    #[test]
    fn serde_rejects_what_parse_iso_rejects() {
        for input in ["\"2025-1-5\"", "\"+12345-01-01\"", "\"2023-02-29\"", "\"20251005\""] {
            assert!(
                serde_json::from_str::<CalendarDate>(input).is_err(),
                "{input} should not deserialize"
            );
        }
    }

    #[test]
    fn iso_text_leaves_four_digits_past_year_9999() {
        let last = date(9999, 12, 31);
        assert_eq!(to_iso_date(last), "9999-12-31");
        let beyond = to_iso_date(last.add_days(1));
        assert_eq!(beyond, "10000-01-01");
        assert!(CalendarDate::parse_iso(&beyond).is_err());
    }
}
