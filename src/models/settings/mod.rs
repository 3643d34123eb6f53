// Settings module
// User preferences persisted in the single-row settings table

use chrono::Weekday;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub id: Option<i64>,
    pub theme: String,
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    pub time_format: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: Some(1),
            theme: "light".to_string(),
            first_day_of_week: 0, // Sunday
            time_format: "12h".to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be 0-6, got {}",
                self.first_day_of_week
            ));
        }

        if self.time_format != "12h" && self.time_format != "24h" {
            return Err("time_format must be '12h' or '24h'".to_string());
        }

        if self.theme != "light" && self.theme != "dark" {
            return Err("theme must be 'light' or 'dark'".to_string());
        }

        Ok(())
    }

    /// Weekday the calendar grid starts on
    pub fn week_start(&self) -> Weekday {
        match self.first_day_of_week {
            1 => Weekday::Mon,
            2 => Weekday::Tue,
            3 => Weekday::Wed,
            4 => Weekday::Thu,
            5 => Weekday::Fri,
            6 => Weekday::Sat,
            _ => Weekday::Sun,
        }
    }

    pub fn uses_24h_time(&self) -> bool {
        self.time_format == "24h"
    }

    pub fn is_dark_theme(&self) -> bool {
        self.theme == "dark"
    }
}
