//! Add/edit form state and the rules for turning it into an event.

use chrono::NaiveDate;

use crate::models::event::{Event, EventColor, EventDetails, EventId, TimeOfDay, ValidationError};

/// What a successful submission asks the event store to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    Add(EventDetails),
    Update(EventId, EventDetails),
}

/// Raw form fields as the user typed them.
///
/// `date` is fixed when adding and inherited from the edited event
/// otherwise; the form never changes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventForm {
    editing: Option<EventId>,
    date: NaiveDate,
    pub name: String,
    pub color: EventColor,
    pub all_day: bool,
    pub start_time: String,
    pub end_time: String,
}

impl EventForm {
    /// Empty form for a new event on `date`
    pub fn new_event(date: NaiveDate) -> Self {
        Self {
            editing: None,
            date,
            name: String::new(),
            color: EventColor::default(),
            all_day: false,
            start_time: String::new(),
            end_time: String::new(),
        }
    }

    /// Form pre-filled from an existing event
    pub fn edit_event(event: &Event) -> Self {
        Self {
            editing: Some(event.id.clone()),
            date: event.date,
            name: event.name.clone(),
            color: event.color,
            all_day: event.is_all_day(),
            start_time: event.start_time().map(|t| t.to_string()).unwrap_or_default(),
            end_time: event.end_time().map(|t| t.to_string()).unwrap_or_default(),
        }
    }

    pub fn is_new(&self) -> bool {
        self.editing.is_none()
    }

    pub fn editing(&self) -> Option<&EventId> {
        self.editing.as_ref()
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Validate the fields and build the matching event variant.
    ///
    /// Time fields are ignored entirely for all-day events.
    pub fn build(&self) -> Result<EventDetails, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if self.all_day {
            return Ok(EventDetails::all_day(name, self.date, self.color));
        }

        let start = parse_time_field(&self.start_time, "start time")
            .ok_or(ValidationError::MissingStartTime)??;
        let end = parse_time_field(&self.end_time, "end time")
            .ok_or(ValidationError::MissingEndTime)??;

        Ok(EventDetails::timed(name, self.date, self.color, start, end))
    }

    /// Validate and wrap the result as an add or an update
    pub fn submit(&self) -> Result<FormSubmission, ValidationError> {
        let details = self.build()?;
        Ok(match &self.editing {
            Some(id) => FormSubmission::Update(id.clone(), details),
            None => FormSubmission::Add(details),
        })
    }

    /// Non-blocking hints shown next to the form
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.all_day {
            return warnings;
        }

        let start = self.start_time.trim().parse::<TimeOfDay>();
        let end = self.end_time.trim().parse::<TimeOfDay>();
        if let (Ok(start), Ok(end)) = (start, end) {
            if end <= start {
                warnings.push(format!("End time {} is not after start time {}", end, start));
            }
        }
        warnings
    }
}

/// `None` when the field is blank, otherwise the parse result
fn parse_time_field(
    raw: &str,
    field: &'static str,
) -> Option<Result<TimeOfDay, ValidationError>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    Some(raw.parse().map_err(|_| ValidationError::InvalidTime {
        field,
        value: raw.to_string(),
    }))
}
