use redthread_core::calendar::{
    build_month_grid, compute_milestones, day_distance, to_iso_date, CalendarDate, MonthGridCell,
    DAYS_PER_WEEK,
};

fn date(year: i32, month: u32, day: u32) -> CalendarDate {
    CalendarDate::from_ymd(year, month, day).unwrap()
}

#[test]
fn distance_is_zero_on_the_met_anchor() {
    let anchor = date(2025, 10, 5);
    assert_eq!(day_distance(anchor, date(2025, 10, 5)), 0);
}

#[test]
fn distance_is_antisymmetric_across_a_range_of_days() {
    let base = date(2023, 12, 20);
    for offset in (-400..400).step_by(37) {
        let other = base.add_days(offset);
        assert_eq!(day_distance(base, other), offset);
        assert_eq!(day_distance(base, other), -day_distance(other, base));
    }
}

#[test]
fn february_day_counts_follow_leap_years() {
    let leap = build_month_grid(date(2024, 2, 1), date(2024, 2, 1));
    let common = build_month_grid(date(2023, 2, 1), date(2023, 2, 1));
    assert_eq!(leap.day_count(), 29);
    assert_eq!(common.day_count(), 28);
}

#[test]
fn first_numbered_cell_sits_at_monday_first_index_of_day_one() {
    let today = date(2026, 10, 17);
    for month in 1..=12 {
        let first = date(2026, month, 1);
        let grid = build_month_grid(first, today);
        assert_eq!(grid.cells.len() % DAYS_PER_WEEK, 0);
        let position = grid
            .cells
            .iter()
            .position(|cell| matches!(cell, MonthGridCell::Day(_)))
            .unwrap();
        assert_eq!(position as u32, first.weekday_from_monday());
    }
}

#[test]
fn milestones_from_together_anchor() {
    let anchor = date(2025, 11, 20);
    let milestones = compute_milestones(anchor, anchor);

    let targets: Vec<_> = milestones
        .iter()
        .map(|milestone| (milestone.label.as_str(), to_iso_date(milestone.target_date)))
        .collect();
    assert_eq!(
        targets,
        vec![
            ("100 days", "2026-02-28".to_string()),
            ("6 months", "2026-05-20".to_string()),
            ("1 year", "2026-11-20".to_string()),
        ]
    );
    assert_eq!(milestones[0].days_remaining, 100);
    assert!(milestones.iter().all(|milestone| !milestone.passed));
}

#[test]
fn milestones_after_target_are_passed() {
    let anchor = date(2025, 11, 20);
    let milestones = compute_milestones(anchor, date(2027, 1, 1));
    for milestone in &milestones {
        assert!(milestone.passed, "{}", milestone.label);
        assert!(milestone.days_remaining < 0, "{}", milestone.label);
    }
}

#[test]
fn iso_strings_round_trip() {
    for input in ["2025-10-05", "2025-11-20", "2026-02-28", "2024-02-29", "1999-01-09"] {
        assert_eq!(to_iso_date(CalendarDate::parse_iso(input).unwrap()), input);
    }
}
