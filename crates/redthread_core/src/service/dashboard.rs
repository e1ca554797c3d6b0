//! Dashboard projection: today, month grid, day counters, milestones.
//!
//! Pure; `today` is supplied by the caller.

use crate::calendar::{
    build_month_grid, compute_milestones, day_counter, format_long, format_month_label,
    CalendarDate, DayCounter, Milestone, MonthGrid,
};
use crate::config::JournalConfig;
use serde::Serialize;

pub const SINCE_MET_LABEL: &str = "Days since we met";
pub const TOGETHER_LABEL: &str = "Days together";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardView {
    pub today: CalendarDate,
    pub today_long: String,
    pub month_label: String,
    pub grid: MonthGrid,
    pub counters: [DayCounter; 2],
    pub milestones: [Milestone; 3],
    pub playlist_url: Option<String>,
}

pub fn build_dashboard(config: &JournalConfig, today: CalendarDate) -> DashboardView {
    DashboardView {
        today,
        today_long: format_long(today),
        month_label: format_month_label(today),
        grid: build_month_grid(today, today),
        counters: [
            day_counter(SINCE_MET_LABEL, config.met_date, today),
            day_counter(TOGETHER_LABEL, config.together_date, today),
        ],
        milestones: compute_milestones(config.together_date, today),
        playlist_url: config.playlist_url.clone(),
    }
}
