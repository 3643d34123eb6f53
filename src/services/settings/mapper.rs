use crate::models::settings::Settings;
use rusqlite::Row;

pub fn row_to_settings(row: &Row) -> Result<Settings, rusqlite::Error> {
    Ok(Settings {
        id: Some(row.get(0)?),
        theme: row.get(1)?,
        first_day_of_week: row.get(2)?,
        time_format: row.get(3)?,
    })
}
