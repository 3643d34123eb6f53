use super::CalendarApp;
use crate::utils::date::shift_month;
use chrono::Local;

impl CalendarApp {
    pub(super) fn navigate_previous(&mut self) {
        self.current_date = shift_month(self.current_date, -1);
    }

    pub(super) fn navigate_next(&mut self) {
        self.current_date = shift_month(self.current_date, 1);
    }

    pub(super) fn jump_to_today(&mut self) {
        self.current_date = Local::now().date_naive();
    }

    /// Arrow keys page months, Home returns to today
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (previous, next, today) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::ArrowLeft) || i.key_pressed(egui::Key::PageUp),
                i.key_pressed(egui::Key::ArrowRight) || i.key_pressed(egui::Key::PageDown),
                i.key_pressed(egui::Key::Home),
            )
        });

        if previous {
            self.navigate_previous();
        }
        if next {
            self.navigate_next();
        }
        if today {
            self.jump_to_today();
        }
    }
}
