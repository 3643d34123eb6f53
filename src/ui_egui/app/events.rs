//! Bridges month view and dialog actions to the event store.

use chrono::NaiveDate;

use super::CalendarApp;
use crate::models::event::EventId;
use crate::services::event::form::FormSubmission;
use crate::ui_egui::event_dialog::EventDialogState;
use crate::ui_egui::views::MonthViewAction;

impl CalendarApp {
    pub(super) fn handle_month_action(&mut self, action: MonthViewAction) {
        match action {
            MonthViewAction::AddEvent(date) => self.open_add_dialog(date),
            MonthViewAction::EditEvent(id) => self.open_edit_dialog(&id),
            MonthViewAction::ShowDay(date) => self.state.day_list_date = Some(date),
        }
    }

    pub(super) fn open_add_dialog(&mut self, date: NaiveDate) {
        self.state
            .open_event_dialog(EventDialogState::new_event(date));
    }

    pub(super) fn open_edit_dialog(&mut self, id: &EventId) {
        match self.context.event_store().get(id) {
            Some(event) => {
                let dialog = EventDialogState::from_event(event);
                self.state.open_event_dialog(dialog);
            }
            None => log::warn!("Cannot edit event {}: it no longer exists", id),
        }
    }

    pub(super) fn commit_submission(&mut self, submission: FormSubmission) {
        match self.context.event_store_mut().apply(submission) {
            Ok((id, true)) => {
                let name = self
                    .context
                    .event_store()
                    .get(&id)
                    .map(|event| event.name.clone())
                    .unwrap_or_default();
                self.state.set_info(format!("Saved \"{}\"", name));
            }
            Ok((id, false)) => {
                self.state
                    .set_error(format!("Event {} was removed before it could be saved", id));
            }
            Err(e) => {
                log::error!("Failed to save event: {}", e);
                self.state.set_error(format!("Failed to save event: {}", e));
            }
        }
    }

    pub(super) fn delete_event(&mut self, id: &EventId) {
        match self.context.event_store_mut().delete_event(id) {
            Ok(true) => self.state.set_info("Event deleted"),
            Ok(false) => {}
            Err(e) => {
                log::error!("Failed to delete event {}: {}", id, e);
                self.state.set_error(format!("Failed to delete event: {}", e));
            }
        }
    }
}
