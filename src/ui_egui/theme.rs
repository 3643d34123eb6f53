//! Theme module for the egui month calendar
//!
//! Defines the CalendarTheme structure, the light and dark presets, and the
//! mapping from event palette colors to screen colors.

use egui::Color32;

use crate::models::event::EventColor;
use crate::models::settings::Settings;

/// All colors used by the calendar window
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Weekday header strip background
    pub header_background: Color32,

    /// Day cell background inside the reference month
    pub day_background: Color32,

    /// Day cell background for days borrowed from adjacent months
    pub outside_background: Color32,

    /// Today's date background color
    pub today_background: Color32,

    /// Today's date border color
    pub today_border: Color32,

    /// Day cell border color
    pub day_border: Color32,

    /// Primary text color (headings, dates)
    pub text_primary: Color32,

    /// Secondary text color (outside-month dates, hints)
    pub text_secondary: Color32,

    /// Date number color for days already over
    pub past_text: Color32,
}

impl CalendarTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            header_background: Color32::from_rgb(232, 236, 244),
            day_background: Color32::from_rgb(255, 255, 255),
            outside_background: Color32::from_rgb(238, 238, 240),
            today_background: Color32::from_rgb(230, 240, 255),
            today_border: Color32::from_rgb(100, 150, 255),
            day_border: Color32::from_rgb(220, 220, 220),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            past_text: Color32::from_rgb(160, 160, 160),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            header_background: Color32::from_rgb(48, 52, 62),
            day_background: Color32::from_rgb(40, 40, 40),
            outside_background: Color32::from_rgb(33, 33, 35),
            today_background: Color32::from_rgb(50, 60, 80),
            today_border: Color32::from_rgb(100, 150, 255),
            day_border: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            past_text: Color32::from_rgb(110, 110, 110),
        }
    }

    pub fn for_settings(settings: &Settings) -> Self {
        if settings.is_dark_theme() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Screen color for an event palette entry
    pub fn event_color(&self, color: EventColor) -> Color32 {
        match (color, self.is_dark) {
            (EventColor::Red, false) => Color32::from_rgb(220, 68, 68),
            (EventColor::Red, true) => Color32::from_rgb(235, 100, 100),
            (EventColor::Green, false) => Color32::from_rgb(46, 160, 90),
            (EventColor::Green, true) => Color32::from_rgb(90, 190, 120),
            (EventColor::Blue, false) => Color32::from_rgb(60, 120, 220),
            (EventColor::Blue, true) => Color32::from_rgb(100, 150, 240),
        }
    }

    /// Text color readable on top of a filled event bar
    pub fn event_text_color(&self) -> Color32 {
        Color32::from_rgb(250, 250, 250)
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;

        visuals.widgets.noninteractive.bg_fill = self.day_background;
        visuals.widgets.hovered.bg_fill = self.today_background;
        visuals.widgets.active.bg_fill = self.today_background;

        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
