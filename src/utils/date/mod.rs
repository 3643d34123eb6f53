// Date utility functions

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime};

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Last representable instant of the day
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap_or(NaiveTime::MIN))
}

/// First day of the month `months` away from the one containing `date`
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let first = start_of_month(date);
    let shifted = if months >= 0 {
        first.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// "May 2024"
pub fn format_month_title(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// "09:30" in 24-hour mode, "9:30 AM" otherwise
pub fn format_time(time: NaiveTime, use_24h: bool) -> String {
    if use_24h {
        time.format("%H:%M").to_string()
    } else {
        time.format("%-I:%M %p").to_string()
    }
}
