//! Status bar showing the event count and the outcome of the last action.

use super::state::StatusKind;
use super::CalendarApp;
use egui::{Color32, RichText};

/// Get theme-aware secondary text color
fn secondary_text_color(is_dark: bool) -> Color32 {
    if is_dark {
        Color32::from_gray(160)
    } else {
        Color32::from_gray(100)
    }
}

impl CalendarApp {
    /// Render the status bar at the bottom of the window
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        let is_dark = self.active_theme.is_dark;
        let today_count = self
            .context
            .event_store()
            .events_on(chrono::Local::now().date_naive())
            .len();
        let total = self.context.event_store().len();
        let mut dismiss = false;

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(24.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        RichText::new(format!("{} today · {} total", today_count, total))
                            .size(12.0)
                            .color(secondary_text_color(is_dark)),
                    );

                    if let Some((kind, message)) = &self.state.status {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.small_button("✕").clicked() {
                                dismiss = true;
                            }
                            let color = match kind {
                                StatusKind::Error => Color32::from_rgb(220, 80, 80),
                                StatusKind::Info => secondary_text_color(is_dark),
                            };
                            ui.label(RichText::new(message).size(12.0).color(color));
                        });
                    }
                });
            });

        if dismiss {
            self.state.status = None;
        }
    }
}
