mod context;
mod events;
mod header;
mod lifecycle;
mod navigation;
mod state;
mod status_bar;

use self::context::AppContext;
use self::state::AppState;
use crate::models::settings::Settings;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::MonthView;
use chrono::NaiveDate;

pub struct CalendarApp {
    /// Shared access to the leaked database and the event store
    context: AppContext,
    /// Persisted user preferences
    settings: Settings,
    /// Any date inside the month being shown
    current_date: NaiveDate,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    /// Month grid with its per-day overflow layouts
    month_view: MonthView,
    /// Dialog and status state
    state: AppState,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }
}
