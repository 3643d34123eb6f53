use super::CalendarApp;
use crate::models::settings::Settings;
use crate::utils::date::format_month_title;
use egui::{Context, RichText};

impl CalendarApp {
    /// Navigation buttons, the month title and the settings menu
    pub(super) fn render_header(&mut self, ctx: &Context) {
        let mut updated_settings = None;

        egui::TopBottomPanel::top("month_header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if ui.button("Today").on_hover_text("Home").clicked() {
                    self.jump_to_today();
                }
                if ui.button("◀").on_hover_text("Previous month").clicked() {
                    self.navigate_previous();
                }
                if ui.button("▶").on_hover_text("Next month").clicked() {
                    self.navigate_next();
                }

                ui.add_space(12.0);
                ui.label(
                    RichText::new(format_month_title(self.current_date))
                        .size(20.0)
                        .strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.menu_button("⚙ Settings", |ui| {
                        updated_settings = render_settings_menu(ui, &self.settings);
                    });
                });
            });
            ui.add_space(4.0);
        });

        if let Some(settings) = updated_settings {
            self.save_settings(ctx, settings);
        }
    }

    fn save_settings(&mut self, ctx: &Context, settings: Settings) {
        if let Err(e) = self.context.settings_service().update(&settings) {
            log::error!("Failed to save settings: {:#}", e);
            self.state.set_error(format!("Failed to save settings: {}", e));
            return;
        }

        let theme_changed = settings.theme != self.settings.theme;
        self.settings = settings;
        if theme_changed {
            self.apply_theme(ctx);
        }
    }
}

/// Returns the edited settings when any option changed
fn render_settings_menu(ui: &mut egui::Ui, current: &Settings) -> Option<Settings> {
    let mut settings = current.clone();

    ui.label(RichText::new("Week starts on").strong());
    ui.radio_value(&mut settings.first_day_of_week, 0, "Sunday");
    ui.radio_value(&mut settings.first_day_of_week, 1, "Monday");
    ui.separator();

    ui.label(RichText::new("Theme").strong());
    ui.radio_value(&mut settings.theme, "light".to_string(), "Light");
    ui.radio_value(&mut settings.theme, "dark".to_string(), "Dark");
    ui.separator();

    ui.label(RichText::new("Time format").strong());
    ui.radio_value(&mut settings.time_format, "12h".to_string(), "12-hour");
    ui.radio_value(&mut settings.time_format, "24h".to_string(), "24-hour");

    (settings != *current).then_some(settings)
}
