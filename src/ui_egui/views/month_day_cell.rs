//! Day cell rendering for the month view.
//!
//! Draws the date number, the add button, and the day's events. Which
//! events fit is decided by the cell's overflow container; the rest are
//! summarised by a "+N More" button.

use chrono::Datelike;
use egui::{Color32, Pos2, Rect, Sense, Stroke, Vec2};

use super::month_view::{MonthView, MonthViewAction, EVENT_ROW_GAP, EVENT_ROW_HEIGHT, MORE_ROW_HEIGHT};
use super::palette::{CalendarCellPalette, EventChipPalette};
use crate::models::event::{Event, EventId, EventTiming};
use crate::models::settings::Settings;
use crate::services::calendar_grid::CalendarDay;
use crate::services::overflow::OverflowContainer;
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::format_time;

/// Space taken by the date number row at the top of a cell
const CELL_HEADER_HEIGHT: f32 = 22.0;
const CELL_PADDING: f32 = 3.0;
const ADD_BUTTON_SIZE: f32 = 18.0;

impl MonthView {
    /// Truncate text to fit within a given pixel width, using binary search
    /// and appending "…" when truncation is needed.
    pub(super) fn truncate_single_line_to_width(
        ui: &egui::Ui,
        text: &str,
        font_id: &egui::FontId,
        color: Color32,
        max_width: f32,
    ) -> String {
        if max_width <= 0.0 {
            return String::new();
        }

        let measure_width = |candidate: &str| {
            let layout_job = egui::text::LayoutJob::simple(
                candidate.to_string(),
                font_id.clone(),
                color,
                f32::INFINITY,
            );
            ui.fonts(|f| f.layout_job(layout_job).size().x)
        };

        if measure_width(text) <= max_width {
            return text.to_string();
        }

        let ellipsis = "…";
        if measure_width(ellipsis) > max_width {
            return String::new();
        }

        let mut char_boundaries: Vec<usize> = text.char_indices().map(|(idx, _)| idx).collect();
        char_boundaries.push(text.len());

        let mut low = 0usize;
        let mut high = char_boundaries.len().saturating_sub(1);

        while low < high {
            let mid = (low + high).div_ceil(2);
            let candidate = format!("{}{}", &text[..char_boundaries[mid]], ellipsis);

            if measure_width(&candidate) <= max_width {
                low = mid;
            } else {
                high = mid.saturating_sub(1);
            }
        }

        if low == 0 {
            ellipsis.to_string()
        } else {
            format!("{}{}", &text[..char_boundaries[low]], ellipsis)
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub(super) fn render_day_cell(
        ui: &mut egui::Ui,
        day: &CalendarDay,
        events: &[&Event],
        container: &mut OverflowContainer<EventId>,
        palette: CalendarCellPalette,
        theme: &CalendarTheme,
        settings: &Settings,
        size: Vec2,
    ) -> Option<MonthViewAction> {
        let mut action = None;
        let (rect, response) = ui.allocate_exact_size(size, Sense::hover());

        ui.painter()
            .rect_filled(rect, 2.0, palette.background_for(day));
        let border_color = if day.is_today {
            palette.today_border
        } else {
            palette.border
        };
        ui.painter()
            .rect_stroke(rect, 2.0, Stroke::new(1.0, border_color));
        if response.hovered() {
            ui.painter()
                .rect_stroke(rect, 2.0, Stroke::new(2.0, palette.hover_border));
        }

        // Date number
        let date_color = palette.date_text_for(day);
        let date_font = if day.is_today {
            egui::FontId::proportional(15.0)
        } else {
            egui::FontId::proportional(14.0)
        };
        ui.painter().text(
            Pos2::new(rect.left() + 5.0, rect.top() + 4.0),
            egui::Align2::LEFT_TOP,
            day.date.day().to_string(),
            date_font,
            date_color,
        );

        // Add button
        let add_rect = Rect::from_min_size(
            Pos2::new(rect.right() - ADD_BUTTON_SIZE - CELL_PADDING, rect.top() + CELL_PADDING),
            Vec2::splat(ADD_BUTTON_SIZE),
        );
        let add_button = egui::Button::new(egui::RichText::new("+").color(palette.text))
            .frame(false)
            .small();
        if ui
            .put(add_rect, add_button)
            .on_hover_text("Add event")
            .clicked()
        {
            action = Some(MonthViewAction::AddEvent(day.date));
        }

        // Events, laid out by the overflow container
        let content_top = rect.top() + CELL_HEADER_HEIGHT;
        let client_extent = (rect.bottom() - CELL_PADDING - content_top).max(0.0);
        container.observe_resize(client_extent);
        container.set_items(
            events
                .iter()
                .map(|event| (event.id.clone(), EVENT_ROW_HEIGHT)),
        );

        let row_width = rect.width() - CELL_PADDING * 2.0;
        let mut y = content_top;
        for (index, event) in events.iter().enumerate() {
            if container.is_hidden(index) {
                continue;
            }

            let row_rect = Rect::from_min_size(
                Pos2::new(rect.left() + CELL_PADDING, y),
                Vec2::new(row_width, EVENT_ROW_HEIGHT),
            );
            if Self::render_event_row(ui, row_rect, event, day, theme, settings) {
                action = Some(MonthViewAction::EditEvent(event.id.clone()));
            }
            y += EVENT_ROW_HEIGHT + EVENT_ROW_GAP;
        }

        if container.indicator_visible() {
            let more_rect = Rect::from_min_size(
                Pos2::new(rect.left() + CELL_PADDING, y),
                Vec2::new(row_width, MORE_ROW_HEIGHT),
            );
            let label = egui::RichText::new(format!("+{} More", container.overflow()))
                .size(11.0)
                .color(palette.today_border);
            if ui
                .put(more_rect, egui::Button::new(label).frame(false).small())
                .clicked()
            {
                action = Some(MonthViewAction::ShowDay(day.date));
            }
        }

        action
    }

    /// Draw one event row and report whether it was clicked
    fn render_event_row(
        ui: &mut egui::Ui,
        row_rect: Rect,
        event: &Event,
        day: &CalendarDay,
        theme: &CalendarTheme,
        settings: &Settings,
    ) -> bool {
        let chip = EventChipPalette::new(theme.event_color(event.color), theme, day.is_past);
        let font_id = egui::FontId::proportional(11.0);
        let response = ui
            .interact(
                row_rect,
                egui::Id::new(("month_event", day.date, &event.id)),
                Sense::click(),
            )
            .on_hover_text(event_tooltip(event, settings));

        match event.timing {
            EventTiming::AllDay => {
                ui.painter().rect_filled(row_rect, 3.0, chip.fill);
                let text = Self::truncate_single_line_to_width(
                    ui,
                    &event.name,
                    &font_id,
                    chip.text,
                    row_rect.width() - 8.0,
                );
                ui.painter().text(
                    Pos2::new(row_rect.left() + 4.0, row_rect.center().y),
                    egui::Align2::LEFT_CENTER,
                    text,
                    font_id,
                    chip.text,
                );
            }
            EventTiming::Timed { start, .. } => {
                let dot_center = Pos2::new(row_rect.left() + 5.0, row_rect.center().y);
                ui.painter().circle_filled(dot_center, 3.5, chip.fill);

                let label = format!(
                    "{} {}",
                    format_time(start.as_naive_time(), settings.uses_24h_time()),
                    event.name
                );
                let text = Self::truncate_single_line_to_width(
                    ui,
                    &label,
                    &font_id,
                    chip.timed_text,
                    row_rect.width() - 14.0,
                );
                ui.painter().text(
                    Pos2::new(row_rect.left() + 12.0, row_rect.center().y),
                    egui::Align2::LEFT_CENTER,
                    text,
                    font_id,
                    chip.timed_text,
                );
            }
        }

        if response.hovered() {
            ui.painter().rect_stroke(
                row_rect,
                3.0,
                Stroke::new(1.0, theme.today_border),
            );
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        response.clicked()
    }
}

fn event_tooltip(event: &Event, settings: &Settings) -> String {
    match event.timing {
        EventTiming::AllDay => format!("{}\nAll day", event.name),
        EventTiming::Timed { start, end } => format!(
            "{}\n{} - {}",
            event.name,
            format_time(start.as_naive_time(), settings.uses_24h_time()),
            format_time(end.as_naive_time(), settings.uses_24h_time())
        ),
    }
}
