use chrono::NaiveDate;
use egui::{Margin, Stroke, Vec2};
use std::collections::HashMap;

use super::palette::CalendarCellPalette;
use crate::models::event::{Event, EventId};
use crate::models::settings::Settings;
use crate::services::calendar_grid::{group_events_by_day, MonthGrid};
use crate::services::overflow::OverflowContainer;
use crate::ui_egui::theme::CalendarTheme;

/// Spacing between grid cells
pub(super) const CELL_SPACING: f32 = 2.0;
/// Height of the weekday header strip
const HEADER_HEIGHT: f32 = 28.0;
/// Cells never shrink below this, the panel scrolls instead
const MIN_CELL_HEIGHT: f32 = 64.0;
/// Height of one event row in a day cell
pub(super) const EVENT_ROW_HEIGHT: f32 = 16.0;
/// Gap between event rows
pub(super) const EVENT_ROW_GAP: f32 = 2.0;
/// Height of the "+N More" row drawn inside the cell
pub(super) const MORE_ROW_HEIGHT: f32 = 14.0;

/// Action returned from month view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthViewAction {
    /// Open the add dialog for a date
    AddEvent(NaiveDate),
    /// Open the edit dialog for an existing event
    EditEvent(EventId),
    /// Open the list of every event on a date
    ShowDay(NaiveDate),
}

/// Month grid renderer.
///
/// Keeps one overflow container per visible day so a cell only relays out
/// when its size or its event list changed since the last frame.
#[derive(Default)]
pub struct MonthView {
    overflow: HashMap<NaiveDate, OverflowContainer<EventId>>,
}

impl MonthView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        grid: &MonthGrid,
        events: &[Event],
        settings: &Settings,
        theme: &CalendarTheme,
    ) -> Option<MonthViewAction> {
        let mut action = None;
        let palette = CalendarCellPalette::from_theme(theme);
        let events_by_day = group_events_by_day(grid, events);

        self.overflow.retain(|date, _| grid.contains(*date));

        let total_spacing = CELL_SPACING * 6.0;
        let col_width = ((ui.available_width() - total_spacing) / 7.0).max(40.0);

        Self::render_weekday_header(ui, grid, &palette, col_width);
        ui.add_space(CELL_SPACING);

        let week_count = grid.week_count().max(1) as f32;
        let rows_spacing = CELL_SPACING * (week_count - 1.0);
        let cell_height = ((ui.available_height() - rows_spacing) / week_count).max(MIN_CELL_HEIGHT);
        let cell_size = Vec2::new(col_width, cell_height);

        ui.spacing_mut().item_spacing = Vec2::splat(CELL_SPACING);
        for week in grid.weeks() {
            ui.horizontal(|ui| {
                for day in week {
                    let day_events = events_by_day
                        .get(&day.date)
                        .map(Vec::as_slice)
                        .unwrap_or_default();
                    let container = self.overflow.entry(day.date).or_insert_with(|| {
                        OverflowContainer::new(EVENT_ROW_GAP, MORE_ROW_HEIGHT)
                    });

                    if let Some(cell_action) = Self::render_day_cell(
                        ui,
                        day,
                        day_events,
                        container,
                        palette,
                        theme,
                        settings,
                        cell_size,
                    ) {
                        action = Some(cell_action);
                    }
                }
            });
        }

        action
    }

    fn render_weekday_header(
        ui: &mut egui::Ui,
        grid: &MonthGrid,
        palette: &CalendarCellPalette,
        col_width: f32,
    ) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing = Vec2::splat(CELL_SPACING);
            for label in grid.weekday_labels() {
                ui.allocate_ui_with_layout(
                    Vec2::new(col_width, HEADER_HEIGHT),
                    egui::Layout::centered_and_justified(egui::Direction::TopDown),
                    |ui| {
                        egui::Frame::none()
                            .fill(palette.header_bg)
                            .rounding(egui::Rounding::same(6.0))
                            .stroke(Stroke::new(1.0, palette.border))
                            .inner_margin(Margin::symmetric(8.0, 6.0))
                            .show(ui, |ui| {
                                ui.centered_and_justified(|ui| {
                                    ui.label(
                                        egui::RichText::new(label)
                                            .size(14.0)
                                            .color(palette.header_text)
                                            .strong(),
                                    );
                                });
                            });
                    },
                );
            }
        });
    }
}
