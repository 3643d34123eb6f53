use egui::{Color32, RichText};

use crate::models::event::EventColor;
use crate::ui_egui::theme::CalendarTheme;

use super::{EventDialogResult, EventDialogState};

const FORM_LABEL_WIDTH: f32 = 110.0;

pub fn render_event_dialog(
    ctx: &egui::Context,
    state: &mut EventDialogState,
    theme: &CalendarTheme,
    show_dialog: &mut bool,
) -> EventDialogResult {
    let mut result = EventDialogResult::default();
    let mut dialog_open = *show_dialog;

    state.check_warnings();

    egui::Window::new(if state.is_editing() {
        "Edit Event"
    } else {
        "Add Event"
    })
    .id(egui::Id::new("event_dialog"))
    .open(&mut dialog_open)
    .collapsible(false)
    .resizable(false)
    .default_width(420.0)
    .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
    .show(ctx, |ui| {
        render_error_banner(ui, state);
        render_warning_banner(ui, state);
        render_fields(ui, state, theme);
        ui.add_space(8.0);
        ui.separator();
        result = render_action_buttons(ui, state, show_dialog);
    });

    if !dialog_open {
        *show_dialog = false;
    }

    result
}

fn render_error_banner(ui: &mut egui::Ui, state: &EventDialogState) {
    if let Some(ref error) = state.error_message {
        ui.colored_label(Color32::RED, RichText::new(error).strong());
        ui.add_space(8.0);
    }
}

fn render_warning_banner(ui: &mut egui::Ui, state: &EventDialogState) {
    if state.warning_messages.is_empty() {
        return;
    }

    let warning_color = Color32::from_rgb(200, 140, 0);

    for warning in &state.warning_messages {
        ui.horizontal(|ui| {
            ui.label(RichText::new("⚠").color(warning_color));
            ui.colored_label(warning_color, warning);
        });
    }
    ui.add_space(4.0);
}

fn render_fields(ui: &mut egui::Ui, state: &mut EventDialogState, theme: &CalendarTheme) {
    let focus_name = state.take_initial_focus();
    let form = &mut state.form;

    labeled_row(ui, "Date:", |ui| {
        ui.label(RichText::new(form.date().format("%A, %B %-d, %Y").to_string()).strong());
    });

    labeled_row(
        ui,
        if form.name.trim().is_empty() {
            RichText::new("Name:")
                .strong()
                .color(Color32::from_rgb(255, 150, 150))
        } else {
            RichText::new("Name:").strong()
        },
        |ui| {
            let response = ui.text_edit_singleline(&mut form.name);
            if focus_name {
                response.request_focus();
            }
            if response.changed() && state.error_message.is_some() {
                state.error_message = None;
            }
        },
    );

    indented_row(ui, |ui| {
        ui.checkbox(&mut form.all_day, "All day");
    });

    ui.add_enabled_ui(!form.all_day, |ui| {
        labeled_row(ui, "Start time:", |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut form.start_time)
                    .hint_text("HH:MM")
                    .desired_width(80.0),
            );
        });
        labeled_row(ui, "End time:", |ui| {
            ui.add(
                egui::TextEdit::singleline(&mut form.end_time)
                    .hint_text("HH:MM")
                    .desired_width(80.0),
            );
        });
    });

    labeled_row(ui, "Color:", |ui| {
        for color in EventColor::ALL {
            let label = RichText::new(capitalize(color.as_str())).color(theme.event_color(color));
            ui.radio_value(&mut form.color, color, label);
        }
    });
}

fn render_action_buttons(
    ui: &mut egui::Ui,
    state: &mut EventDialogState,
    show_dialog: &mut bool,
) -> EventDialogResult {
    let mut result = EventDialogResult::default();

    indented_row(ui, |ui| {
        let submit_label = if state.is_editing() { "Save" } else { "Add" };
        let submit_button =
            egui::Button::new(submit_label).fill(Color32::from_rgb(70, 120, 200));

        if ui.add(submit_button).clicked() {
            if let Some(submission) = state.submit() {
                result.submission = Some(submission);
                *show_dialog = false;
            }
        }

        if ui.button("Cancel").clicked() {
            *show_dialog = false;
        }

        if let Some(id) = state.form.editing() {
            ui.add_space(20.0);
            if ui
                .button(RichText::new("Delete").color(Color32::RED))
                .clicked()
            {
                result.delete_request = Some(id.clone());
                *show_dialog = false;
            }
        }
    });

    ui.add_space(8.0);
    result
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn labeled_row<F>(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>, add_contents: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.horizontal(|ui| {
        render_form_label(ui, label);
        add_contents(ui);
    });
}

fn render_form_label(ui: &mut egui::Ui, label: impl Into<egui::WidgetText>) {
    let text = label.into();
    ui.allocate_ui_with_layout(
        egui::Vec2::new(FORM_LABEL_WIDTH, 24.0),
        egui::Layout::right_to_left(egui::Align::Center),
        move |ui| {
            ui.label(text);
        },
    );
}

fn indented_row<F>(ui: &mut egui::Ui, add_contents: F)
where
    F: FnOnce(&mut egui::Ui),
{
    ui.horizontal(|ui| {
        ui.add_space(FORM_LABEL_WIDTH);
        add_contents(ui);
    });
}
