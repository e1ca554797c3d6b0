//! Monday-first month grid construction.
//!
//! # Responsibility
//! - Lay out one month as whole weeks with padding cells.
//! - Mark the cell matching the caller-supplied "today".
//!
//! # Invariants
//! - `cells.len() % 7 == 0`.
//! - Leading padding equals the Monday-first weekday index of day 1.
//! - Month length comes from calendar arithmetic, never from a table.

use super::date_math::{format_month_label, CalendarDate};
use serde::Serialize;

pub const DAYS_PER_WEEK: usize = 7;

/// A numbered day inside a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// Day of month, 1..=31.
    pub day_number: u32,
    pub date: CalendarDate,
    pub is_today: bool,
}

/// One slot of the grid: padding or a numbered day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MonthGridCell {
    Empty,
    Day(DayCell),
}

impl MonthGridCell {
    pub fn day(&self) -> Option<&DayCell> {
        match self {
            Self::Empty => None,
            Self::Day(cell) => Some(cell),
        }
    }
}

/// Whole-week table of one month, Monday-first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub cells: Vec<MonthGridCell>,
}

impl MonthGrid {
    /// Rows of exactly seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[MonthGridCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(MonthGridCell::day)
    }

    pub fn day_count(&self) -> usize {
        self.day_cells().count()
    }

    /// Number of padding cells before day 1.
    pub fn leading_padding(&self) -> usize {
        self.cells
            .iter()
            .take_while(|cell| matches!(cell, MonthGridCell::Empty))
            .count()
    }

    /// Number of padding cells after the last day.
    pub fn trailing_padding(&self) -> usize {
        self.cells
            .iter()
            .rev()
            .take_while(|cell| matches!(cell, MonthGridCell::Empty))
            .count()
    }

    /// `October 2026`.
    pub fn label(&self) -> String {
        CalendarDate::from_ymd(self.year, self.month, 1)
            .map(format_month_label)
            .unwrap_or_default()
    }
}

/// Builds the grid for the month containing `month_of`.
///
/// Only year and month of `month_of` are consulted. `today` drives the
/// `is_today` flag and is never read from the clock here.
pub fn build_month_grid(month_of: CalendarDate, today: CalendarDate) -> MonthGrid {
    let first = month_of.first_of_month();
    let leading = first.weekday_from_monday() as usize;
    let days_in_month = first.last_of_month().day();

    let mut cells = Vec::with_capacity(6 * DAYS_PER_WEEK);
    cells.extend(std::iter::repeat(MonthGridCell::Empty).take(leading));

    for offset in 0..days_in_month {
        let date = first.add_days(i64::from(offset));
        cells.push(MonthGridCell::Day(DayCell {
            day_number: date.day(),
            date,
            is_today: date == today,
        }));
    }

    while cells.len() % DAYS_PER_WEEK != 0 {
        cells.push(MonthGridCell::Empty);
    }

    MonthGrid {
        year: first.year(),
        month: first.month(),
        cells,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn leap_february_has_twenty_nine_days() {
        let grid = build_month_grid(date(2024, 2, 10), date(2024, 2, 10));
        assert_eq!(grid.day_count(), 29);
        assert_eq!(grid.cells.len() % DAYS_PER_WEEK, 0);
    }

    #[test]
    fn common_february_has_twenty_eight_days() {
        let grid = build_month_grid(date(2023, 2, 1), date(2023, 2, 1));
        assert_eq!(grid.day_count(), 28);
    }

    #[test]
    fn month_starting_on_sunday_has_six_leading_cells() {
        // 2026-02-01 is a Sunday.
        let grid = build_month_grid(date(2026, 2, 14), date(2026, 2, 14));
        assert_eq!(grid.leading_padding(), 6);
        let first = grid.day_cells().next().unwrap();
        assert_eq!(first.day_number, 1);
    }

    #[test]
    fn month_filling_whole_weeks_has_no_trailing_padding() {
        // February 2021 starts on Monday and has 28 days.
        let grid = build_month_grid(date(2021, 2, 1), date(2021, 2, 1));
        assert_eq!(grid.leading_padding(), 0);
        assert_eq!(grid.trailing_padding(), 0);
        assert_eq!(grid.cells.len(), 28);
        assert_eq!(grid.weeks().count(), 4);
    }

    #[test]
    fn every_month_is_whole_weeks_and_day_one_sits_at_its_weekday() {
        for year in [2023, 2024, 2025, 2026] {
            for month in 1..=12 {
                let first = date(year, month, 1);
                let grid = build_month_grid(first, first);
                assert_eq!(grid.cells.len() % DAYS_PER_WEEK, 0, "{year}-{month}");
                assert_eq!(
                    grid.leading_padding(),
                    first.weekday_from_monday() as usize,
                    "{year}-{month}"
                );
                assert_eq!(grid.day_count() as u32, first.last_of_month().day());
            }
        }
    }

    #[test]
    fn only_matching_day_is_marked_today() {
        let today = date(2026, 10, 17);
        let grid = build_month_grid(today, today);
        let marked: Vec<_> = grid.day_cells().filter(|cell| cell.is_today).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].day_number, 17);
        assert_eq!(marked[0].date, today);
    }

    #[test]
    fn same_day_number_in_other_month_is_not_today() {
        let grid = build_month_grid(date(2026, 9, 1), date(2026, 10, 17));
        assert!(grid.day_cells().all(|cell| !cell.is_today));
        let grid = build_month_grid(date(2025, 10, 1), date(2026, 10, 17));
        assert!(grid.day_cells().all(|cell| !cell.is_today));
    }

    #[test]
    fn cells_carry_their_iso_dates_in_order() {
        let grid = build_month_grid(date(2025, 12, 25), date(2025, 12, 25));
        let dates: Vec<_> = grid.day_cells().map(|cell| cell.date.to_string()).collect();
        assert_eq!(dates.first().map(String::as_str), Some("2025-12-01"));
        assert_eq!(dates.last().map(String::as_str), Some("2025-12-31"));
        assert_eq!(grid.label(), "December 2025");
    }
}
