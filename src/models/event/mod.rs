// Event module
// Day-scheduled calendar event: all-day or timed, tagged with a palette color

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Reasons an event (or a submitted event form) is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Event name cannot be empty")]
    EmptyName,
    #[error("Start time is required for timed events")]
    MissingStartTime,
    #[error("End time is required for timed events")]
    MissingEndTime,
    #[error("'{value}' is not a valid {field} (expected HH:MM)")]
    InvalidTime { field: &'static str, value: String },
    #[error("All-day events cannot carry a start or end time")]
    TimesOnAllDay,
}

/// Opaque unique event identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Generate a fresh random identifier (UUID v4)
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for EventId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Fixed color palette used to tag events
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventColor {
    #[default]
    Red,
    Green,
    Blue,
}

impl EventColor {
    /// Palette in display order; the first entry is the default for new events
    pub const ALL: [EventColor; 3] = [EventColor::Red, EventColor::Green, EventColor::Blue];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        }
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Self::Red),
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            other => Err(format!("Unknown event color '{}'", other)),
        }
    }
}

/// Minute-precision time of day, written as 24-hour "HH:MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn new(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Numeric time of day in hours (09:30 -> 9.5), used for ordering
    pub fn as_hours(&self) -> f64 {
        self.hour() as f64 + self.minute() as f64 / 60.0
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // Seconds are not representable in "HH:MM"
        Self(NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NaiveTime::parse_from_str(s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
            .map(Self::from)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid time of day '{}'", raw)))
    }
}

/// Whether an event spans the whole day or a time range.
///
/// The variant decides which time fields exist, so an all-day event with a
/// start time cannot be represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTiming {
    AllDay,
    Timed { start: TimeOfDay, end: TimeOfDay },
}

impl EventTiming {
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay)
    }
}

/// Every event field except the identifier; the payload of add and update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    pub name: String,
    pub date: NaiveDate,
    pub color: EventColor,
    pub timing: EventTiming,
}

impl EventDetails {
    pub fn all_day(name: impl Into<String>, date: NaiveDate, color: EventColor) -> Self {
        Self {
            name: name.into(),
            date,
            color,
            timing: EventTiming::AllDay,
        }
    }

    pub fn timed(
        name: impl Into<String>,
        date: NaiveDate,
        color: EventColor,
        start: TimeOfDay,
        end: TimeOfDay,
    ) -> Self {
        Self {
            name: name.into(),
            date,
            color,
            timing: EventTiming::Timed { start, end },
        }
    }

    /// Check the constraints the type system cannot express
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(())
    }
}

/// A scheduled item on a calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredEvent", into = "StoredEvent")]
pub struct Event {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
    pub color: EventColor,
    pub timing: EventTiming,
}

impl Event {
    pub fn new(id: EventId, details: EventDetails) -> Self {
        Self {
            id,
            name: details.name,
            date: details.date,
            color: details.color,
            timing: details.timing,
        }
    }

    /// Copy of everything except the id
    pub fn details(&self) -> EventDetails {
        EventDetails {
            name: self.name.clone(),
            date: self.date,
            color: self.color,
            timing: self.timing,
        }
    }

    pub fn is_all_day(&self) -> bool {
        self.timing.is_all_day()
    }

    pub fn start_time(&self) -> Option<TimeOfDay> {
        match self.timing {
            EventTiming::AllDay => None,
            EventTiming::Timed { start, .. } => Some(start),
        }
    }

    pub fn end_time(&self) -> Option<TimeOfDay> {
        match self.timing {
            EventTiming::AllDay => None,
            EventTiming::Timed { end, .. } => Some(end),
        }
    }
}

/// Persisted JSON shape: `allDay` discriminates whether the time fields exist
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredEvent {
    id: EventId,
    name: String,
    #[serde(with = "stored_date")]
    date: NaiveDate,
    color: EventColor,
    all_day: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start_time: Option<TimeOfDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end_time: Option<TimeOfDay>,
}

impl TryFrom<StoredEvent> for Event {
    type Error = ValidationError;

    fn try_from(stored: StoredEvent) -> Result<Self, Self::Error> {
        let timing = if stored.all_day {
            if stored.start_time.is_some() || stored.end_time.is_some() {
                return Err(ValidationError::TimesOnAllDay);
            }
            EventTiming::AllDay
        } else {
            EventTiming::Timed {
                start: stored.start_time.ok_or(ValidationError::MissingStartTime)?,
                end: stored.end_time.ok_or(ValidationError::MissingEndTime)?,
            }
        };

        // Names are not checked on load, only the timing shape
        let details = EventDetails {
            name: stored.name,
            date: stored.date,
            color: stored.color,
            timing,
        };
        Ok(Event::new(stored.id, details))
    }
}

impl From<Event> for StoredEvent {
    fn from(event: Event) -> Self {
        let (start_time, end_time) = match event.timing {
            EventTiming::AllDay => (None, None),
            EventTiming::Timed { start, end } => (Some(start), Some(end)),
        };
        Self {
            id: event.id,
            name: event.name,
            date: event.date,
            color: event.color,
            all_day: event.timing.is_all_day(),
            start_time,
            end_time,
        }
    }
}

/// Calendar dates are written as `YYYY-MM-DD`. Full ISO-8601 timestamps are
/// also accepted on read and resolve to the local date they denote.
mod stored_date {
    use super::*;

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date '{}'", raw)))
    }

    pub(super) fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, FORMAT).ok().or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.with_timezone(&Local).date_naive())
        })
    }
}
