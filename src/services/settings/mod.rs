// Settings service module
// Loads and stores user preferences in the settings table

mod mapper;
mod service;

pub use service::SettingsService;
