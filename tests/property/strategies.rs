// Shared proptest strategies

use chrono::NaiveDate;
use month_calendar::models::event::{EventColor, EventDetails, TimeOfDay};
use proptest::prelude::*;

pub fn time_of_day() -> impl Strategy<Value = TimeOfDay> {
    (0u32..24, 0u32..60).prop_map(|(hour, minute)| TimeOfDay::new(hour, minute).unwrap())
}

pub fn color() -> impl Strategy<Value = EventColor> {
    prop::sample::select(EventColor::ALL.to_vec())
}

/// Valid event payloads spread over one week of May 2024
pub fn event_details() -> impl Strategy<Value = EventDetails> {
    (
        "[A-Za-z][A-Za-z0-9 ]{0,15}",
        12u32..=18,
        color(),
        prop::option::of((time_of_day(), time_of_day())),
    )
        .prop_map(|(name, day, color, times)| {
            let date = NaiveDate::from_ymd_opt(2024, 5, day).unwrap();
            match times {
                Some((start, end)) => EventDetails::timed(name, date, color, start, end),
                None => EventDetails::all_day(name, date, color),
            }
        })
}
