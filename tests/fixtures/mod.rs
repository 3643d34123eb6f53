// Test fixtures - reusable test data
// Provides consistent test data across all test files
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Tuesday, May 14 2024
    pub fn may_14_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, 14).unwrap()
    }

    /// Noon on May 14 2024, used as "now"
    pub fn may_14_2024_noon() -> NaiveDateTime {
        may_14_2024().and_hms_opt(12, 0, 0).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample event payloads for testing
pub mod events {
    use super::*;
    use month_calendar::models::event::{EventColor, EventDetails, TimeOfDay};

    pub fn time(value: &str) -> TimeOfDay {
        value.parse().unwrap()
    }

    /// Timed 09:00-09:15 standup
    pub fn standup(date: NaiveDate) -> EventDetails {
        EventDetails::timed("Standup", date, EventColor::Red, time("09:00"), time("09:15"))
    }

    /// Early timed event, sorts before the standup
    pub fn gym(date: NaiveDate) -> EventDetails {
        EventDetails::timed("Gym", date, EventColor::Green, time("07:30"), time("08:30"))
    }

    pub fn holiday(date: NaiveDate) -> EventDetails {
        EventDetails::all_day("Holiday", date, EventColor::Blue)
    }

    /// `count` timed events on the same day, an hour apart from 08:00
    pub fn busy_day(date: NaiveDate, count: u32) -> Vec<EventDetails> {
        (0..count)
            .map(|i| {
                let hour = 8 + i % 12;
                EventDetails::timed(
                    format!("Meeting {}", i + 1),
                    date,
                    EventColor::ALL[i as usize % EventColor::ALL.len()],
                    TimeOfDay::new(hour, 0).unwrap(),
                    TimeOfDay::new(hour, 45).unwrap(),
                )
            })
            .collect()
    }
}
