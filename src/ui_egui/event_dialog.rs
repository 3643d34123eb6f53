use chrono::NaiveDate;

use crate::models::event::{Event, EventId};
use crate::services::event::form::{EventForm, FormSubmission};

mod render;

pub use render::render_event_dialog;

/// State for the add/edit event dialog
pub struct EventDialogState {
    /// Raw field values
    pub form: EventForm,

    // UI state
    pub error_message: Option<String>,
    pub warning_messages: Vec<String>,
    focus_requested: bool,
}

/// What the caller should do once the dialog has been drawn
#[derive(Debug, Default)]
pub struct EventDialogResult {
    /// Validated add/update, ready for the event store
    pub submission: Option<FormSubmission>,
    /// Event the user asked to delete
    pub delete_request: Option<EventId>,
}

impl EventDialogState {
    /// Create a new event dialog state for creating a new event
    pub fn new_event(date: NaiveDate) -> Self {
        Self::with_form(EventForm::new_event(date))
    }

    /// Create a new event dialog state for editing an existing event
    pub fn from_event(event: &Event) -> Self {
        Self::with_form(EventForm::edit_event(event))
    }

    fn with_form(form: EventForm) -> Self {
        Self {
            form,
            error_message: None,
            warning_messages: Vec::new(),
            focus_requested: false,
        }
    }

    pub fn is_editing(&self) -> bool {
        !self.form.is_new()
    }

    /// True exactly once for a new event, on the dialog's first frame
    pub fn take_initial_focus(&mut self) -> bool {
        if self.focus_requested || !self.form.is_new() {
            return false;
        }
        self.focus_requested = true;
        true
    }

    pub fn check_warnings(&mut self) {
        self.warning_messages = self.form.warnings();
    }

    /// Validate the form; on failure the error is kept for display
    pub fn submit(&mut self) -> Option<FormSubmission> {
        match self.form.submit() {
            Ok(submission) => {
                self.error_message = None;
                Some(submission)
            }
            Err(err) => {
                log::debug!("Event form rejected: {}", err);
                self.error_message = Some(err.to_string());
                None
            }
        }
    }
}
