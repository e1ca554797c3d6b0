use redthread_core::db::open_db_in_memory;
use redthread_core::{CalendarDate, EventService, ServiceError, SqliteEventRepository};

fn date(value: &str) -> CalendarDate {
    CalendarDate::parse_iso(value).unwrap()
}

#[test]
fn add_event_round_trips_calendar_date() {
    let conn = open_db_in_memory().unwrap();
    let service = EventService::new(SqliteEventRepository::new(&conn));

    let event = service
        .add_event(" Concert ", date("2026-02-28"), Some("row F".to_string()))
        .unwrap();
    assert_eq!(event.title, "Concert");
    assert_eq!(event.date, date("2026-02-28"));
    assert_eq!(event.note.as_deref(), Some("row F"));
}

#[test]
fn blank_title_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let service = EventService::new(SqliteEventRepository::new(&conn));

    let err = service
        .add_event("  ", date("2026-02-28"), None)
        .unwrap_err();
    assert!(matches!(err, ServiceError::EmptyInput("event title")));
}

#[test]
fn events_in_month_are_bounded_and_ordered_by_date() {
    let conn = open_db_in_memory().unwrap();
    let service = EventService::new(SqliteEventRepository::new(&conn));

    service.add_event("late", date("2024-02-29"), None).unwrap();
    service.add_event("early", date("2024-02-01"), None).unwrap();
    service.add_event("before", date("2024-01-31"), None).unwrap();
    service.add_event("after", date("2024-03-01"), None).unwrap();

    let titles: Vec<_> = service
        .events_in_month(date("2024-02-14"))
        .unwrap()
        .into_iter()
        .map(|event| event.title)
        .collect();
    assert_eq!(titles, vec!["early", "late"]);
    assert_eq!(service.list_events().unwrap().len(), 4);
}

#[test]
fn delete_event_then_missing() {
    let conn = open_db_in_memory().unwrap();
    let service = EventService::new(SqliteEventRepository::new(&conn));

    let event = service.add_event("dinner", date("2025-12-24"), None).unwrap();
    service.delete_event(event.id).unwrap();
    assert!(matches!(
        service.delete_event(event.id).unwrap_err(),
        ServiceError::NotFound(id) if id == event.id
    ));
}

#[test]
fn malformed_stored_date_is_reported() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO events (id, title, event_date) VALUES ('00000000-0000-0000-0000-000000000002', 'x', '24/02/2026');",
        [],
    )
    .unwrap();

    let service = EventService::new(SqliteEventRepository::new(&conn));
    assert!(matches!(
        service.list_events().unwrap_err(),
        ServiceError::Repo(_)
    ));
}
