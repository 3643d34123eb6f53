mod app;
pub mod dialogs;
mod event_dialog;
pub mod theme;
mod views;

pub use app::CalendarApp;
