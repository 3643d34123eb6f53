use crate::models::settings::Settings;
use crate::services::database::Database;
use anyhow::{anyhow, Context, Result};

use super::mapper::row_to_settings;

pub struct SettingsService<'a> {
    db: &'a Database,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Get the current settings
    pub fn get(&self) -> Result<Settings> {
        let conn = self.db.connection();

        let settings = conn
            .query_row(
                "SELECT id, theme, first_day_of_week, time_format FROM settings WHERE id = 1",
                [],
                row_to_settings,
            )
            .context("Failed to load settings")?;

        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &Settings) -> Result<()> {
        settings
            .validate()
            .map_err(|e| anyhow!("Invalid settings: {}", e))?;

        let conn = self.db.connection();

        conn.execute(
            "UPDATE settings \
             SET theme = ?1, \
                 first_day_of_week = ?2, \
                 time_format = ?3, \
                 updated_at = CURRENT_TIMESTAMP \
             WHERE id = 1",
            (
                &settings.theme,
                settings.first_day_of_week,
                &settings.time_format,
            ),
        )
        .context("Failed to update settings")?;

        log::debug!(
            "Settings saved: theme={}, first_day_of_week={}, time_format={}",
            settings.theme,
            settings.first_day_of_week,
            settings.time_format
        );
        Ok(())
    }

    /// Reset settings to defaults
    pub fn reset(&self) -> Result<()> {
        let default_settings = Settings::default();
        self.update(&default_settings)
    }
}
