use month_calendar::models::event::Event;
use month_calendar::services::storage::{EventRepository, MemoryStore, StorageError, EVENTS_KEY};
use pretty_assertions::assert_eq;

#[test]
fn test_stored_json_layout() {
    let json = r#"[
        {"id":"a","name":"Holiday","date":"2024-05-14","color":"blue","allDay":true},
        {"id":"b","name":"Standup","date":"2024-05-14","color":"red","allDay":false,"startTime":"09:00","endTime":"09:15"}
    ]"#;
    let mut repository = EventRepository::new(MemoryStore::new().with_entry(EVENTS_KEY, json));

    let events: Vec<Event> = repository.load().unwrap();
    assert_eq!(events.len(), 2);
    assert!(events[0].is_all_day());
    assert_eq!(events[1].start_time().unwrap().to_string(), "09:00");

    repository.save(&events).unwrap();
    let rewritten: serde_json::Value =
        serde_json::from_str(repository.store().raw(EVENTS_KEY).unwrap()).unwrap();
    let original: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(rewritten, original);
}

#[test]
fn test_unknown_color_is_corrupt() {
    let json = r#"[{"id":"a","name":"X","date":"2024-05-14","color":"purple","allDay":true}]"#;
    let repository = EventRepository::new(MemoryStore::new().with_entry(EVENTS_KEY, json));
    assert!(matches!(repository.load(), Err(StorageError::Corrupt { .. })));
}

#[test]
fn test_custom_key() {
    let mut repository = EventRepository::with_key(MemoryStore::new(), "CALENDAR");
    repository.save(&[]).unwrap();
    assert_eq!(repository.store().raw("CALENDAR"), Some("[]"));
    assert_eq!(repository.corrupt_key(), "CALENDAR.corrupt");
}
