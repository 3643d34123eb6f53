//! Month grid construction.
//!
//! A month is shown as whole weeks: from the start of the week holding the
//! 1st to the end of the week holding the last day, so neighbouring months
//! fill the leading and trailing cells.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

use crate::models::event::Event;
use crate::services::event::ordering::sort_day_events;
use crate::utils::date::{end_of_day, end_of_month, format_month_title, is_same_month, start_of_month};

/// One cell of the month grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for lead/trail days borrowed from adjacent months
    pub in_reference_month: bool,
    /// The whole day lies before the current moment
    pub is_past: bool,
    pub is_today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: NaiveDate,
    week_start: Weekday,
    days: Vec<CalendarDay>,
}

impl MonthGrid {
    /// Build the grid for the month containing `reference`
    pub fn build(reference: NaiveDate, week_start: Weekday, now: NaiveDateTime) -> Self {
        let month = start_of_month(reference);
        let first = month.week(week_start).first_day();
        let last = end_of_month(month).week(week_start).last_day();
        let today = now.date();

        let days = first
            .iter_days()
            .take_while(|date| *date <= last)
            .map(|date| CalendarDay {
                date,
                in_reference_month: is_same_month(date, month),
                is_past: end_of_day(date) < now,
                is_today: date == today,
            })
            .collect::<Vec<_>>();

        log::trace!(
            "Built {} grid: {} days from {} to {}",
            format_month_title(month),
            days.len(),
            first,
            last
        );

        Self {
            month,
            week_start,
            days,
        }
    }

    /// First day of the reference month
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }

    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }

    pub fn week_count(&self) -> usize {
        self.days.len() / 7
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|day| day.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|day| day.date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        matches!((self.first_date(), self.last_date()), (Some(first), Some(last)) if first <= date && date <= last)
    }

    pub fn title(&self) -> String {
        format_month_title(self.month)
    }

    /// Short weekday names in column order
    pub fn weekday_labels(&self) -> [&'static str; 7] {
        let mut labels = [""; 7];
        let mut weekday = self.week_start;
        for label in labels.iter_mut() {
            *label = weekday_short_name(weekday);
            weekday = weekday.succ();
        }
        labels
    }
}

fn weekday_short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

/// Events dated on `date`, in collection order
pub fn events_for_day(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|event| event.date == date).collect()
}

/// Visible events keyed by day, each list in display order
pub fn group_events_by_day<'a>(
    grid: &MonthGrid,
    events: &'a [Event],
) -> BTreeMap<NaiveDate, Vec<&'a Event>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&'a Event>> = BTreeMap::new();
    for event in events.iter().filter(|event| grid.contains(event.date)) {
        grouped.entry(event.date).or_default().push(event);
    }
    for day_events in grouped.values_mut() {
        sort_day_events(day_events);
    }
    grouped
}

/// Used by callers that only need a date's weekday column
pub fn column_of(date: NaiveDate, week_start: Weekday) -> usize {
    let offset = date.weekday().num_days_from_monday() as i64
        - week_start.num_days_from_monday() as i64;
    offset.rem_euclid(7) as usize
}
