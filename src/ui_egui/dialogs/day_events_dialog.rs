//! Dialog listing every event of one day, opened from "+N More"

use chrono::NaiveDate;
use egui::{Margin, RichText, Stroke, Vec2};

use crate::models::event::{Event, EventId, EventTiming};
use crate::models::settings::Settings;
use crate::services::event::ordering::sorted_day_events;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::format_time;

/// Action result from the day events dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayEventsAction {
    /// No action
    None,
    /// Edit the selected event
    EditEvent(EventId),
    /// Add another event on the same date
    AddEvent(NaiveDate),
    /// Close the dialog
    Close,
}

/// Render the list of events on `date`
pub fn render_day_events_dialog(
    ctx: &egui::Context,
    date: NaiveDate,
    events: &[Event],
    settings: &Settings,
    theme: &CalendarTheme,
) -> DayEventsAction {
    let mut action = DayEventsAction::None;
    let mut dialog_open = true;
    let day_events = sorted_day_events(events.iter().filter(|event| event.date == date));

    egui::Window::new(date.format("%A, %B %-d, %Y").to_string())
        .id(egui::Id::new("day_events_dialog"))
        .open(&mut dialog_open)
        .collapsible(false)
        .resizable(true)
        .default_width(360.0)
        .min_width(280.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("{} event(s)", day_events.len()));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("+ Add").clicked() {
                        action = DayEventsAction::AddEvent(date);
                    }
                });
            });
            ui.separator();

            if day_events.is_empty() {
                ui.label(RichText::new("No events on this day").italics());
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, true])
                .max_height(400.0)
                .show(ui, |ui| {
                    for event in &day_events {
                        if render_event_entry(ui, event, settings, theme) {
                            action = DayEventsAction::EditEvent(event.id.clone());
                        }
                        ui.add_space(4.0);
                    }
                });
        });

    if !dialog_open && action == DayEventsAction::None {
        action = DayEventsAction::Close;
    }

    action
}

fn render_event_entry(
    ui: &mut egui::Ui,
    event: &Event,
    settings: &Settings,
    theme: &CalendarTheme,
) -> bool {
    let event_color = theme.event_color(event.color);
    let when = match event.timing {
        EventTiming::AllDay => "All day".to_string(),
        EventTiming::Timed { start, end } => format!(
            "{} - {}",
            format_time(start.as_naive_time(), settings.uses_24h_time()),
            format_time(end.as_naive_time(), settings.uses_24h_time())
        ),
    };

    let response = egui::Frame::none()
        .fill(theme.day_background)
        .rounding(egui::Rounding::same(6.0))
        .stroke(Stroke::new(1.0, theme.day_border))
        .inner_margin(Margin::same(8.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(4.0, 34.0), egui::Sense::hover());
                ui.painter().rect_filled(rect, 2.0, event_color);
                ui.add_space(8.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new(&event.name).strong().color(theme.text_primary));
                    ui.label(RichText::new(when).size(11.0).color(theme.text_secondary));
                });
            });
        })
        .response
        .interact(egui::Sense::click())
        .on_hover_text("Click to edit");

    response.clicked()
}
