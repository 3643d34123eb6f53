use crate::ui_egui::event_dialog::EventDialogState;
use chrono::NaiveDate;

/// Severity of the message shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Default)]
pub struct AppState {
    /// Add/edit dialog, present while it is open
    pub event_dialog: Option<EventDialogState>,
    pub show_event_dialog: bool,
    /// Date whose full event list is open ("+N More")
    pub day_list_date: Option<NaiveDate>,
    pub status: Option<(StatusKind, String)>,
}

impl AppState {
    pub fn open_event_dialog(&mut self, dialog: EventDialogState) {
        self.event_dialog = Some(dialog);
        self.show_event_dialog = true;
    }

    pub fn close_event_dialog(&mut self) {
        self.event_dialog = None;
        self.show_event_dialog = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status = Some((StatusKind::Error, message.into()));
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some((StatusKind::Info, message.into()));
    }
}
