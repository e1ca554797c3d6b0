//! Anniversary milestones and day counters derived from a fixed anchor.
//!
//! # Invariants
//! - `days_remaining == day_distance(today, target_date)`.
//! - `passed == target_date < today`; a milestone landing today is pending.
//! - Nothing here is persisted; values are rebuilt per request.

use super::date_math::{day_distance, CalendarDate};
use serde::Serialize;

/// Offset rule applied to the anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneOffset {
    Days(i64),
    Months(i64),
    Years(i64),
}

impl MilestoneOffset {
    pub fn apply(self, anchor: CalendarDate) -> CalendarDate {
        match self {
            Self::Days(days) => anchor.add_days(days),
            Self::Months(months) => anchor.add_months_rollover(months),
            Self::Years(years) => anchor.add_years_rollover(years),
        }
    }
}

/// Labelled offset rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MilestoneRule {
    pub label: &'static str,
    pub offset: MilestoneOffset,
}

pub const DEFAULT_MILESTONE_RULES: [MilestoneRule; 3] = [
    MilestoneRule {
        label: "100 days",
        offset: MilestoneOffset::Days(100),
    },
    MilestoneRule {
        label: "6 months",
        offset: MilestoneOffset::Months(6),
    },
    MilestoneRule {
        label: "1 year",
        offset: MilestoneOffset::Years(1),
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub label: String,
    pub target_date: CalendarDate,
    /// Negative once the target is behind `today`.
    pub days_remaining: i64,
    pub passed: bool,
}

impl Milestone {
    fn derive(rule: &MilestoneRule, anchor: CalendarDate, today: CalendarDate) -> Self {
        let target_date = rule.offset.apply(anchor);
        Self {
            label: rule.label.to_string(),
            target_date,
            days_remaining: day_distance(today, target_date),
            passed: target_date < today,
        }
    }
}

/// Elapsed-days counter such as "Days together".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCounter {
    pub label: String,
    pub since: CalendarDate,
    pub days: i64,
}

/// Computes the three default milestones in fixed order.
pub fn compute_milestones(anchor: CalendarDate, today: CalendarDate) -> [Milestone; 3] {
    DEFAULT_MILESTONE_RULES.map(|rule| Milestone::derive(&rule, anchor, today))
}

/// Computes milestones for an arbitrary rule list, preserving its order.
pub fn compute_milestones_with(
    rules: &[MilestoneRule],
    anchor: CalendarDate,
    today: CalendarDate,
) -> Vec<Milestone> {
    rules
        .iter()
        .map(|rule| Milestone::derive(rule, anchor, today))
        .collect()
}

pub fn day_counter(label: impl Into<String>, since: CalendarDate, today: CalendarDate) -> DayCounter {
    DayCounter {
        label: label.into(),
        since,
        days: day_distance(since, today),
    }
}
