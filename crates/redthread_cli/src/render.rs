//! Plain-text rendering for terminal output.

use redthread_core::calendar::format_long;
use redthread_core::{
    CalendarDate, DashboardView, Event, LoveNote, Memory, Milestone, MonthGrid, MonthGridCell,
    PinnedNote, Todo,
};
use std::collections::BTreeSet;

const WEEKDAY_INITIALS: [&str; 7] = ["M", "T", "W", "T", "F", "S", "S"];

pub fn print_dashboard(view: &DashboardView, month_events: &[Event], pinned: &[PinnedNote]) {
    println!("TODAY");
    println!("{}", view.today_long);
    println!();

    let event_days: BTreeSet<u32> = month_events.iter().map(|event| event.date.day()).collect();
    for line in month_grid_lines(&view.grid, &event_days) {
        println!("{line}");
    }
    println!("{}", view.month_label.to_uppercase());
    println!();

    for counter in &view.counters {
        println!("{:<20}{:>6}   since {}", counter.label, counter.days, counter.since);
    }

    if !month_events.is_empty() {
        println!();
        println!("THIS MONTH");
        for event in month_events {
            println!("  {}  {}", event.date, event.title);
        }
    }

    println!();
    print_pinned(pinned);

    if let Some(url) = view.playlist_url.as_deref() {
        println!();
        println!("Our playlist: {url}");
    }
}

/// Renders the grid as rows of four-character cells. Today is bracketed,
/// days with events carry a trailing `*`.
pub fn month_grid_lines(grid: &MonthGrid, event_days: &BTreeSet<u32>) -> Vec<String> {
    let header: String = WEEKDAY_INITIALS
        .iter()
        .map(|initial| format!("{initial:>3} "))
        .collect();

    let mut lines = vec![header.trim_end().to_string()];
    for week in grid.weeks() {
        let row: String = week
            .iter()
            .map(|cell| match cell {
                MonthGridCell::Empty => "    ".to_string(),
                MonthGridCell::Day(day) if day.is_today => format!("[{:>2}]", day.day_number),
                MonthGridCell::Day(day) if event_days.contains(&day.day_number) => {
                    format!("{:>3}*", day.day_number)
                }
                MonthGridCell::Day(day) => format!("{:>3} ", day.day_number),
            })
            .collect();
        lines.push(row.trim_end().to_string());
    }
    lines
}

pub fn print_milestones(milestones: &[Milestone]) {
    println!("MILESTONES");
    for milestone in milestones {
        let status = if milestone.passed {
            "passed".to_string()
        } else {
            format!("{} days", milestone.days_remaining)
        };
        println!(
            "  {:<10}{}   {}",
            milestone.label,
            format_long(milestone.target_date),
            status
        );
    }
}

pub fn print_memories(memories: &[Memory]) {
    if memories.is_empty() {
        println!("No memories yet. Add the first one with `redthread memory add`.");
        return;
    }
    for memory in memories {
        println!("{}  {}", memory.id, memory.display_title());
        if let Some(body) = memory.body.as_deref() {
            println!("    {body}");
        }
        if let Some(url) = memory.image_url.as_deref() {
            println!("    photo: {url}");
        }
    }
}

pub fn print_love_notes(notes: &[LoveNote]) {
    if notes.is_empty() {
        println!("No love notes yet.");
        return;
    }
    for note in notes {
        println!("{}  {}", note.id, note.display_title());
        if let Some(body) = note.body.as_deref() {
            println!("    {body}");
        }
    }
}

pub fn print_checklist(items: &[Todo]) {
    if items.is_empty() {
        println!("Nothing on the list.");
        return;
    }
    for item in items {
        let mark = if item.done { "x" } else { " " };
        println!("[{mark}] {}  {}", item.text, item.id);
    }
}

pub fn print_pinned(notes: &[PinnedNote]) {
    println!("PINNED NOTES");
    for note in notes {
        let body = if note.body.is_empty() {
            "(empty)"
        } else {
            note.body.as_str()
        };
        println!("  {:<8}{body}", note.owner);
    }
}

pub fn print_events(events: &[Event], today: CalendarDate) {
    if events.is_empty() {
        println!("No events.");
        return;
    }
    for event in events {
        let marker = if event.date < today { " (past)" } else { "" };
        println!("{}  {}{marker}  {}", event.date, event.title, event.id);
        if let Some(note) = event.note.as_deref() {
            println!("    {note}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::month_grid_lines;
    use redthread_core::{build_month_grid, CalendarDate};
    use std::collections::BTreeSet;

    #[test]
    fn grid_lines_mark_today_and_event_days() {
        let today = CalendarDate::from_ymd(2026, 2, 14).unwrap();
        let grid = build_month_grid(today, today);
        let lines = month_grid_lines(&grid, &BTreeSet::from([1, 20]));

        assert_eq!(lines[0], "  M   T   W   T   F   S   S");
        // 2026-02-01 is a Sunday: six blank cells then day 1.
        assert_eq!(lines[1], format!("{}  1*", " ".repeat(24)));
        assert!(lines[3].contains("[14]"));
        assert!(lines.iter().any(|line| line.contains(" 20*")));
        assert_eq!(lines.len(), 1 + grid.cells.len() / 7);
    }
}
