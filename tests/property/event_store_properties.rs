// Properties of sequences of store mutations

use std::collections::HashSet;

use month_calendar::models::event::{Event, EventDetails, EventId};
use month_calendar::services::event::EventStore;
use month_calendar::services::storage::{EventRepository, MemoryStore, EVENTS_KEY};
use proptest::prelude::*;

use crate::strategies::event_details;

#[derive(Debug, Clone)]
enum Op {
    Add(EventDetails),
    Update(usize, EventDetails),
    Delete(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => event_details().prop_map(Op::Add),
        2 => (any::<usize>(), event_details()).prop_map(|(i, d)| Op::Update(i, d)),
        1 => any::<usize>().prop_map(Op::Delete),
    ]
}

/// Picks an existing id, or one that is certainly absent when the store is empty
fn pick_id(store: &EventStore<MemoryStore>, index: usize) -> EventId {
    match store.len() {
        0 => EventId::from("missing"),
        len => store.events()[index % len].id.clone(),
    }
}

fn persisted(store: &EventStore<MemoryStore>) -> Vec<Event> {
    let raw = store.repository().store().raw(EVENTS_KEY).unwrap_or("[]");
    serde_json::from_str(raw).unwrap()
}

proptest! {
    /// Property: ids stay unique and storage mirrors memory after every mutation
    #[test]
    fn prop_ids_unique_after_any_mutations(ops in prop::collection::vec(op(), 1..40)) {
        let mut store = EventStore::open(EventRepository::new(MemoryStore::new())).unwrap();

        for op in ops {
            match op {
                Op::Add(details) => {
                    let before = store.len();
                    let id = store.add_event(details.clone()).unwrap();
                    prop_assert_eq!(store.len(), before + 1);
                    prop_assert_eq!(store.get(&id).unwrap().details(), details);
                }
                Op::Update(index, details) => {
                    let id = pick_id(&store, index);
                    let before = store.len();
                    let updated = store.update_event(&id, details.clone()).unwrap();
                    prop_assert_eq!(store.len(), before);
                    if updated {
                        prop_assert_eq!(store.get(&id).unwrap().details(), details);
                    }
                }
                Op::Delete(index) => {
                    let id = pick_id(&store, index);
                    let existed = store.contains(&id);
                    prop_assert_eq!(store.delete_event(&id).unwrap(), existed);
                    prop_assert!(!store.contains(&id));
                }
            }

            let ids: HashSet<&EventId> = store.events().iter().map(|event| &event.id).collect();
            prop_assert_eq!(ids.len(), store.len());
            prop_assert_eq!(persisted(&store), store.events().to_vec());
        }
    }

    /// Property: reopening from the persisted JSON reproduces the collection
    #[test]
    fn prop_reopen_restores_collection(details in prop::collection::vec(event_details(), 0..20)) {
        let mut store = EventStore::open(EventRepository::new(MemoryStore::new())).unwrap();
        for d in details {
            store.add_event(d).unwrap();
        }

        let raw = store.repository().store().raw(EVENTS_KEY).unwrap_or("[]").to_string();
        let reopened =
            EventStore::open(EventRepository::new(MemoryStore::new().with_entry(EVENTS_KEY, raw)))
                .unwrap();
        prop_assert_eq!(reopened.events(), store.events());
    }
}
