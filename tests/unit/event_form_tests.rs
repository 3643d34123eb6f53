use month_calendar::models::event::{Event, EventColor, EventDetails, EventId, ValidationError};
use month_calendar::services::event::form::{EventForm, FormSubmission};
use month_calendar::services::event::EventStore;
use month_calendar::services::storage::{EventRepository, MemoryStore};
use pretty_assertions::assert_eq;
use test_case::test_case;

use crate::fixtures::dates::may_14_2024;
use crate::fixtures::events::{standup, time};

fn fill(form: &mut EventForm, name: &str, start: &str, end: &str) {
    form.name = name.to_string();
    form.start_time = start.to_string();
    form.end_time = end.to_string();
}

#[test]
fn test_rejected_form_commits_nothing() {
    let mut store = EventStore::open(EventRepository::new(MemoryStore::new())).unwrap();
    let mut form = EventForm::new_event(may_14_2024());
    fill(&mut form, "", "09:00", "10:00");

    assert_eq!(form.submit(), Err(ValidationError::EmptyName));
    assert!(store.is_empty());

    fill(&mut form, "Standup", "09:00", "09:15");
    let submission = form.submit().unwrap();
    let (id, changed) = store.apply(submission).unwrap();
    assert!(changed);
    assert_eq!(store.get(&id).unwrap().details(), standup(may_14_2024()));
}

#[test_case("24:00" ; "hour out of range")]
#[test_case("9:60" ; "minute out of range")]
#[test_case("nine" ; "not a time")]
fn test_invalid_times_are_rejected(value: &str) {
    let mut form = EventForm::new_event(may_14_2024());
    fill(&mut form, "Gym", "07:00", value);
    assert!(matches!(
        form.submit(),
        Err(ValidationError::InvalidTime { field: "end time", .. })
    ));
}

#[test]
fn test_switching_to_timed_requires_times() {
    let event = Event::new(
        EventId::from("holiday"),
        EventDetails::all_day("Holiday", may_14_2024(), EventColor::Blue),
    );
    let mut form = EventForm::edit_event(&event);
    assert!(form.start_time.is_empty());

    form.all_day = false;
    assert_eq!(form.submit(), Err(ValidationError::MissingStartTime));

    form.start_time = "10:00".to_string();
    form.end_time = "11:30".to_string();
    assert_eq!(
        form.submit(),
        Ok(FormSubmission::Update(
            event.id.clone(),
            EventDetails::timed("Holiday", may_14_2024(), EventColor::Blue, time("10:00"), time("11:30")),
        ))
    );
}

#[test]
fn test_name_is_trimmed() {
    let mut form = EventForm::new_event(may_14_2024());
    form.all_day = true;
    form.name = "  Conference  ".to_string();
    assert_eq!(form.build().unwrap().name, "Conference");
}
