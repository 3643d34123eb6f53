use super::context::AppContext;
use super::state::AppState;
use super::CalendarApp;
use crate::models::settings::Settings;
use crate::services::calendar_grid::MonthGrid;
use crate::services::database::Database;
use crate::services::event::EventStore;
use crate::services::settings::SettingsService;
use crate::services::storage::{EventRepository, SqliteStore};
use crate::ui_egui::dialogs::day_events_dialog::{render_day_events_dialog, DayEventsAction};
use crate::ui_egui::event_dialog::render_event_dialog;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::MonthView;
use anyhow::{Context, Result};
use chrono::Local;
#[cfg(not(debug_assertions))]
use directories::ProjectDirs;

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self> {
        // Initialize database and leak it for 'static lifetime required by eframe
        let database = initialize_database()?;

        let settings_service = SettingsService::new(database);
        let settings = load_settings_or_default(&settings_service);
        log::info!(
            "Loaded settings: theme={}, first_day_of_week={}, time_format={}",
            settings.theme,
            settings.first_day_of_week,
            settings.time_format
        );

        let event_store = EventStore::open(EventRepository::new(SqliteStore::new(database)))
            .context("Failed to load stored events")?;

        let active_theme = CalendarTheme::for_settings(&settings);
        active_theme.apply_to_context(&cc.egui_ctx);

        Ok(Self {
            context: AppContext::new(database, event_store),
            settings,
            current_date: Local::now().date_naive(),
            active_theme,
            month_view: MonthView::new(),
            state: AppState::default(),
        })
    }

    pub(super) fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = CalendarTheme::for_settings(&self.settings);
        theme.apply_to_context(ctx);
        self.active_theme = theme;
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard_shortcuts(ctx);

        self.render_header(ctx);

        // Render status bar (before CentralPanel so it takes bottom space)
        self.render_status_bar(ctx);

        self.render_main_panel(ctx);

        self.handle_dialogs(ctx);
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) {
        let grid = MonthGrid::build(
            self.current_date,
            self.settings.week_start(),
            Local::now().naive_local(),
        );

        let action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        self.month_view.show(
                            ui,
                            &grid,
                            self.context.event_store().events(),
                            &self.settings,
                            &self.active_theme,
                        )
                    })
                    .inner
            })
            .inner;

        if let Some(action) = action {
            self.handle_month_action(action);
        }
    }

    fn handle_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(date) = self.state.day_list_date {
            let action = render_day_events_dialog(
                ctx,
                date,
                self.context.event_store().events(),
                &self.settings,
                &self.active_theme,
            );
            match action {
                DayEventsAction::None => {}
                DayEventsAction::Close => self.state.day_list_date = None,
                DayEventsAction::EditEvent(id) => {
                    self.state.day_list_date = None;
                    self.open_edit_dialog(&id);
                }
                DayEventsAction::AddEvent(date) => {
                    self.state.day_list_date = None;
                    self.open_add_dialog(date);
                }
            }
        }

        if self.state.show_event_dialog {
            if let Some(dialog) = self.state.event_dialog.as_mut() {
                let mut show_dialog = true;
                let result =
                    render_event_dialog(ctx, dialog, &self.active_theme, &mut show_dialog);

                // The dialog is gone before the store is touched
                if !show_dialog {
                    self.state.close_event_dialog();
                }
                if let Some(submission) = result.submission {
                    self.commit_submission(submission);
                }
                if let Some(id) = result.delete_request {
                    self.delete_event(&id);
                }
            } else {
                self.state.show_event_dialog = false;
            }
        }
    }
}

fn initialize_database() -> Result<&'static Database> {
    #[cfg(debug_assertions)]
    let db_path = "calendar.db".to_string();

    #[cfg(not(debug_assertions))]
    let db_path = {
        if let Some(proj_dirs) = ProjectDirs::from("com", "MonthCalendar", "MonthCalendar") {
            let data_dir = proj_dirs.data_dir();
            std::fs::create_dir_all(data_dir).context("Failed to create data directory")?;
            data_dir.join("calendar.db").to_string_lossy().to_string()
        } else {
            "calendar_prod.db".to_string()
        }
    };

    log::info!("Using database at {}", db_path);
    let db = Database::new(&db_path)?;
    db.initialize_schema()
        .context("Failed to initialize database schema")?;

    Ok(Box::leak(Box::new(db)))
}

fn load_settings_or_default(settings_service: &SettingsService) -> Settings {
    match settings_service.get() {
        Ok(settings) => settings,
        Err(e) => {
            log::warn!("Failed to load settings: {}, using defaults", e);
            Settings::default()
        }
    }
}
