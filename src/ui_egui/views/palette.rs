use crate::services::calendar_grid::CalendarDay;
use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub outside_bg: Color32,
    pub today_bg: Color32,
    pub border: Color32,
    pub today_border: Color32,
    pub text: Color32,
    pub outside_text: Color32,
    pub past_text: Color32,
    pub hover_border: Color32,
    pub header_bg: Color32,
    pub header_text: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            outside_bg: theme.outside_background,
            today_bg: theme.today_background,
            border: theme.day_border,
            today_border: theme.today_border,
            text: theme.text_primary,
            outside_text: theme.text_secondary,
            past_text: theme.past_text,
            hover_border: with_alpha(theme.today_border, if theme.is_dark { 160 } else { 120 }),
            header_bg: theme.header_background,
            header_text: theme.text_primary,
        }
    }

    pub fn background_for(&self, day: &CalendarDay) -> Color32 {
        if day.is_today {
            self.today_bg
        } else if !day.in_reference_month {
            self.outside_bg
        } else {
            self.regular_bg
        }
    }

    /// Date number color; past days are grayed, outside days dimmed
    pub fn date_text_for(&self, day: &CalendarDay) -> Color32 {
        if day.is_today {
            self.today_border
        } else if day.is_past {
            self.past_text
        } else if !day.in_reference_month {
            self.outside_text
        } else {
            self.text
        }
    }
}

/// Colors for one event row inside a day cell
#[derive(Clone, Copy)]
pub(crate) struct EventChipPalette {
    pub fill: Color32,
    pub text: Color32,
    pub timed_text: Color32,
}

impl EventChipPalette {
    pub fn new(base: Color32, theme: &CalendarTheme, is_past: bool) -> Self {
        let fill = if is_past {
            blend(base, theme.day_background, 0.55)
        } else {
            base
        };
        Self {
            fill,
            text: theme.event_text_color(),
            timed_text: if is_past {
                theme.past_text
            } else {
                theme.text_primary
            },
        }
    }
}
