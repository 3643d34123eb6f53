use crate::services::database::Database;
use crate::services::event::EventStore;
use crate::services::settings::SettingsService;
use crate::services::storage::SqliteStore;

pub type AppEventStore = EventStore<SqliteStore<'static>>;

/// Shared access point for services and resources that multiple app modules need.
pub struct AppContext {
    database: &'static Database,
    event_store: AppEventStore,
}

impl AppContext {
    pub fn new(database: &'static Database, event_store: AppEventStore) -> Self {
        Self {
            database,
            event_store,
        }
    }

    pub fn settings_service(&self) -> SettingsService<'static> {
        SettingsService::new(self.database)
    }

    pub fn event_store(&self) -> &AppEventStore {
        &self.event_store
    }

    pub fn event_store_mut(&mut self) -> &mut AppEventStore {
        &mut self.event_store
    }
}
