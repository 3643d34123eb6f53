// Properties of the per-day display order

use std::cmp::Ordering;

use month_calendar::models::event::{Event, EventId};
use month_calendar::services::event::ordering::{compare_day_order, sort_day_events};
use proptest::prelude::*;

use crate::fixtures::dates::may_14_2024;
use crate::strategies::event_details;

fn day_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec(event_details(), 0..25).prop_map(|details| {
        details
            .into_iter()
            .enumerate()
            .map(|(i, mut d)| {
                d.date = may_14_2024();
                Event::new(EventId::from(format!("evt-{}", i)), d)
            })
            .collect()
    })
}

proptest! {
    /// Property: sorting an already sorted day changes nothing
    #[test]
    fn prop_sort_is_idempotent(mut events in day_events()) {
        sort_day_events(&mut events);
        let once = events.clone();
        sort_day_events(&mut events);
        prop_assert_eq!(events, once);
    }

    /// Property: all-day first, timed ascending by start
    #[test]
    fn prop_sorted_order_is_monotonic(mut events in day_events()) {
        sort_day_events(&mut events);
        for pair in events.windows(2) {
            prop_assert_ne!(compare_day_order(&pair[0], &pair[1]), Ordering::Greater);
            if !pair[0].is_all_day() {
                prop_assert!(!pair[1].is_all_day());
                prop_assert!(pair[0].start_time() <= pair[1].start_time());
            }
        }
    }

    /// Property: all-day events keep their original relative order
    #[test]
    fn prop_all_day_order_is_stable(events in day_events()) {
        let all_day_before: Vec<EventId> = events
            .iter()
            .filter(|e| e.is_all_day())
            .map(|e| e.id.clone())
            .collect();

        let mut sorted = events.clone();
        sort_day_events(&mut sorted);
        let all_day_after: Vec<EventId> = sorted
            .iter()
            .take_while(|e| e.is_all_day())
            .map(|e| e.id.clone())
            .collect();

        prop_assert_eq!(all_day_after, all_day_before);
    }
}
