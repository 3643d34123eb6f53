//! Display order of the events within one day.

use std::borrow::Borrow;
use std::cmp::Ordering;

use crate::models::event::{Event, EventTiming};

/// All-day events first (ties keep their order), then timed events by
/// start time, earliest first.
pub fn compare_day_order(a: &Event, b: &Event) -> Ordering {
    match (a.timing, b.timing) {
        (EventTiming::AllDay, EventTiming::AllDay) => Ordering::Equal,
        (EventTiming::AllDay, EventTiming::Timed { .. }) => Ordering::Less,
        (EventTiming::Timed { .. }, EventTiming::AllDay) => Ordering::Greater,
        (EventTiming::Timed { start: a, .. }, EventTiming::Timed { start: b, .. }) => {
            a.as_hours().total_cmp(&b.as_hours())
        }
    }
}

/// Stable in-place sort into day display order
pub fn sort_day_events<E: Borrow<Event>>(events: &mut [E]) {
    events.sort_by(|a, b| compare_day_order(a.borrow(), b.borrow()));
}

/// Collect and sort one day's events
pub fn sorted_day_events<'a, I>(events: I) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    let mut events: Vec<&Event> = events.into_iter().collect();
    sort_day_events(&mut events);
    events
}
