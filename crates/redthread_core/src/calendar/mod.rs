//! Pure calendar engine: day arithmetic, month grids and milestones.
//!
//! # Responsibility
//! - Own all date math used by the dashboard and record views.
//!
//! # Invariants
//! - No function in this module reads the clock except
//!   `CalendarDate::today_local`; callers sample once and pass `today` down.
//! - No I/O, no shared mutable state.

pub mod date_math;
pub mod milestone;
pub mod month_grid;

pub use date_math::{
    day_distance, format_long, format_month_label, to_iso_date, CalendarDate, DateParseError,
};
pub use milestone::{
    compute_milestones, compute_milestones_with, day_counter, DayCounter, Milestone,
    MilestoneOffset, MilestoneRule, DEFAULT_MILESTONE_RULES,
};
pub use month_grid::{build_month_grid, DayCell, MonthGrid, MonthGridCell, DAYS_PER_WEEK};
