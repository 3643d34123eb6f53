//! Calendar event service entry point.
//! Owns the in-memory event collection and persists it after every
//! mutation; ordering and form validation live in focused submodules.

use std::collections::HashSet;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::event::{Event, EventDetails, EventId, ValidationError};
use crate::services::storage::{EventRepository, KeyValueStore, StorageError};

pub mod form;
pub mod ordering;

use self::form::FormSubmission;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("Invalid event: {0}")]
    InvalidEvent(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The event collection plus the repository it is persisted through.
///
/// Mutation methods are the only write surface. Each one writes the full
/// collection back; if that write fails the in-memory change is rolled back.
pub struct EventStore<S: KeyValueStore> {
    events: Vec<Event>,
    repository: EventRepository<S>,
}

impl<S: KeyValueStore> EventStore<S> {
    /// Load the collection from storage.
    ///
    /// Unreadable data is copied aside (best effort) and the store starts
    /// empty; read failures of the storage itself are returned.
    pub fn open(mut repository: EventRepository<S>) -> Result<Self, EventStoreError> {
        let loaded = match repository.load() {
            Ok(events) => events,
            Err(StorageError::Corrupt { key, source }) => {
                log::error!(
                    "Stored events under '{}' could not be parsed ({}); starting with an empty calendar",
                    key,
                    source
                );
                if let Err(err) = repository.quarantine() {
                    log::error!("Could not preserve unreadable events: {}", err);
                }
                Vec::new()
            }
            Err(err) => return Err(err.into()),
        };

        let mut seen = HashSet::new();
        let mut events = Vec::with_capacity(loaded.len());
        for event in loaded {
            if seen.insert(event.id.clone()) {
                events.push(event);
            } else {
                log::warn!("Dropping stored event with duplicate id {}", event.id);
            }
        }

        log::info!("Loaded {} events from '{}'", events.len(), repository.key());
        Ok(Self { events, repository })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|event| &event.id == id)
    }

    pub fn contains(&self, id: &EventId) -> bool {
        self.get(id).is_some()
    }

    /// Events dated on `date`, in collection order
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|event| event.date == date).collect()
    }

    pub fn repository(&self) -> &EventRepository<S> {
        &self.repository
    }

    /// Append a new event under a freshly generated id
    pub fn add_event(&mut self, details: EventDetails) -> Result<EventId, EventStoreError> {
        details.validate()?;

        let mut id = EventId::generate();
        while self.contains(&id) {
            id = EventId::generate();
        }

        let snapshot = self.events.clone();
        self.events.push(Event::new(id.clone(), details));
        self.persist_or_restore(snapshot)?;

        log::debug!("Added event {}", id);
        Ok(id)
    }

    /// Replace every field of the event with `id`.
    ///
    /// Returns `Ok(false)` and leaves the collection unchanged when no event
    /// has that id.
    pub fn update_event(
        &mut self,
        id: &EventId,
        details: EventDetails,
    ) -> Result<bool, EventStoreError> {
        details.validate()?;

        let snapshot = self.events.clone();
        let updated = match self.events.iter_mut().find(|event| &event.id == id) {
            Some(event) => {
                *event = Event::new(id.clone(), details);
                true
            }
            None => {
                log::warn!("Update ignored: no event with id {}", id);
                false
            }
        };
        self.persist_or_restore(snapshot)?;

        if updated {
            log::debug!("Updated event {}", id);
        }
        Ok(updated)
    }

    /// Remove the event with `id`; `Ok(false)` when there is none
    pub fn delete_event(&mut self, id: &EventId) -> Result<bool, EventStoreError> {
        let snapshot = self.events.clone();
        let before = self.events.len();
        self.events.retain(|event| &event.id != id);
        let deleted = self.events.len() != before;
        if !deleted {
            log::warn!("Delete ignored: no event with id {}", id);
        }
        self.persist_or_restore(snapshot)?;

        if deleted {
            log::debug!("Deleted event {}", id);
        }
        Ok(deleted)
    }

    /// Commit a validated form submission; returns the affected id and
    /// whether the collection changed
    pub fn apply(
        &mut self,
        submission: FormSubmission,
    ) -> Result<(EventId, bool), EventStoreError> {
        match submission {
            FormSubmission::Add(details) => self.add_event(details).map(|id| (id, true)),
            FormSubmission::Update(id, details) => {
                let changed = self.update_event(&id, details)?;
                Ok((id, changed))
            }
        }
    }

    fn persist_or_restore(&mut self, snapshot: Vec<Event>) -> Result<(), EventStoreError> {
        if let Err(err) = self.repository.save(&self.events) {
            log::error!("Failed to persist events, reverting change: {}", err);
            self.events = snapshot;
            return Err(err.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{EventColor, TimeOfDay};
    use crate::services::storage::{MemoryStore, MockKeyValueStore, EVENTS_KEY};
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
    }

    fn standup() -> EventDetails {
        EventDetails::timed(
            "Standup",
            date(),
            EventColor::Red,
            TimeOfDay::new(9, 0).unwrap(),
            TimeOfDay::new(9, 15).unwrap(),
        )
    }

    fn holiday() -> EventDetails {
        EventDetails::all_day("Holiday", date(), EventColor::Green)
    }

    fn empty_store() -> EventStore<MemoryStore> {
        EventStore::open(EventRepository::new(MemoryStore::new())).unwrap()
    }

    fn stored_events(store: &EventStore<MemoryStore>) -> Vec<Event> {
        let raw = store.repository().store().raw(EVENTS_KEY).unwrap();
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_add_event_assigns_id_and_persists() {
        let mut store = empty_store();
        let id = store.add_event(standup()).unwrap();

        assert_eq!(store.len(), 1);
        let event = store.get(&id).unwrap();
        assert_eq!(event.details(), standup());
        assert_eq!(stored_events(&store), store.events().to_vec());
    }

    #[test]
    fn test_add_event_rejects_blank_name() {
        let mut store = empty_store();
        let mut details = holiday();
        details.name = "  ".to_string();

        let result = store.add_event(details);
        assert!(matches!(
            result,
            Err(EventStoreError::InvalidEvent(ValidationError::EmptyName))
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update_event_replaces_all_fields_but_id() {
        let mut store = empty_store();
        let id = store.add_event(standup()).unwrap();

        assert!(store.update_event(&id, holiday()).unwrap());

        let event = store.get(&id).unwrap();
        assert_eq!(event.id, id);
        assert_eq!(event.details(), holiday());
        assert!(event.is_all_day());
        assert_eq!(stored_events(&store)[0].details(), holiday());
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut store = empty_store();
        store.add_event(standup()).unwrap();
        let before = store.events().to_vec();

        let updated = store.update_event(&EventId::from("missing"), holiday()).unwrap();
        assert!(!updated);
        assert_eq!(store.events(), before.as_slice());
    }

    #[test]
    fn test_delete_event() {
        let mut store = empty_store();
        let keep = store.add_event(holiday()).unwrap();
        let gone = store.add_event(standup()).unwrap();

        assert!(store.delete_event(&gone).unwrap());
        assert!(!store.delete_event(&gone).unwrap());
        assert_eq!(store.len(), 1);
        assert!(store.contains(&keep));
        assert_eq!(stored_events(&store).len(), 1);
    }

    #[test]
    fn test_events_on_filters_by_date() {
        let mut store = empty_store();
        store.add_event(standup()).unwrap();
        let mut other_day = holiday();
        other_day.date = date().succ_opt().unwrap();
        store.add_event(other_day).unwrap();

        assert_eq!(store.events_on(date()).len(), 1);
        assert_eq!(store.events_on(date())[0].name, "Standup");
    }

    #[test]
    fn test_apply_submissions() {
        let mut store = empty_store();
        let (id, changed) = store.apply(FormSubmission::Add(standup())).unwrap();
        assert!(changed);

        let (same_id, changed) = store
            .apply(FormSubmission::Update(id.clone(), holiday()))
            .unwrap();
        assert_eq!(same_id, id);
        assert!(changed);
        assert!(store.get(&id).unwrap().is_all_day());
    }

    #[test]
    fn test_open_reloads_previous_session() {
        let mut first = empty_store();
        first.add_event(standup()).unwrap();
        first.add_event(holiday()).unwrap();
        let raw = first
            .repository()
            .store()
            .raw(EVENTS_KEY)
            .unwrap()
            .to_string();

        let reopened =
            EventStore::open(EventRepository::new(MemoryStore::new().with_entry(EVENTS_KEY, raw)))
                .unwrap();
        assert_eq!(reopened.events(), first.events());
    }

    #[test]
    fn test_open_corrupt_data_falls_back_to_empty() {
        let memory = MemoryStore::new().with_entry(EVENTS_KEY, "{{{");
        let store = EventStore::open(EventRepository::new(memory)).unwrap();

        assert!(store.is_empty());
        assert_eq!(store.repository().store().raw("EVENTS.corrupt"), Some("{{{"));
    }

    #[test]
    fn test_open_starts_empty_when_corrupt_copy_fails() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get()
            .returning(|_| Ok(Some("not json".to_string())));
        mock.expect_set()
            .returning(|_, _| Err(anyhow!("read-only storage")));

        let store = EventStore::open(EventRepository::new(mock)).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_open_keeps_events_beside_blank_named_record() {
        let json = r#"[
            {"id":"a","name":"Trip","date":"2024-05-14","color":"blue","allDay":true},
            {"id":"b","name":"  ","date":"2024-05-14","color":"red","allDay":true}
        ]"#;
        let memory = MemoryStore::new().with_entry(EVENTS_KEY, json);
        let store = EventStore::open(EventRepository::new(memory)).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&EventId::from("a")).unwrap().name, "Trip");
        assert_eq!(store.repository().store().raw("EVENTS.corrupt"), None);
    }

    #[test]
    fn test_open_drops_duplicate_ids() {
        let json = r#"[
            {"id":"dup","name":"First","date":"2024-05-14","color":"red","allDay":true},
            {"id":"dup","name":"Second","date":"2024-05-15","color":"blue","allDay":true}
        ]"#;
        let memory = MemoryStore::new().with_entry(EVENTS_KEY, json);
        let store = EventStore::open(EventRepository::new(memory)).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.events()[0].name, "First");
    }

    #[test]
    fn test_failed_write_rolls_back() {
        let mut mock = MockKeyValueStore::new();
        mock.expect_get().returning(|_| Ok(None));
        mock.expect_set()
            .returning(|_, _| Err(anyhow!("storage full")));

        let mut store = EventStore::open(EventRepository::new(mock)).unwrap();
        let result = store.add_event(standup());

        assert!(matches!(result, Err(EventStoreError::Storage(_))));
        assert!(store.is_empty());
    }
}
