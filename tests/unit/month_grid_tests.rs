use chrono::{Datelike, NaiveDate, Weekday};
use month_calendar::services::calendar_grid::{column_of, MonthGrid};
use month_calendar::utils::date::shift_month;
use test_case::test_case;

use crate::fixtures::dates::{leap_day_2024, may_14_2024, may_14_2024_noon};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test_case(Weekday::Sun ; "sunday start")]
#[test_case(Weekday::Mon ; "monday start")]
fn test_grid_covers_whole_weeks(start: Weekday) {
    // Walk two years of months to cover every layout
    let mut month = ymd(2024, 1, 1);
    for _ in 0..24 {
        let grid = MonthGrid::build(month, start, may_14_2024_noon());
        let first = grid.first_date().unwrap();
        let last = grid.last_date().unwrap();

        assert_eq!(grid.days().len() % 7, 0);
        assert!((4..=6).contains(&grid.week_count()));
        assert_eq!(first.weekday(), start);
        assert_eq!(column_of(last, start), 6);
        assert!(first <= month);
        assert!(last >= month.with_day(28).unwrap());
        assert_eq!(
            grid.days().iter().filter(|d| d.in_reference_month).count() as u32,
            days_in_month(month)
        );

        month = shift_month(month, 1);
    }
}

fn days_in_month(first: NaiveDate) -> u32 {
    shift_month(first, 1).pred_opt().unwrap().day()
}

#[test]
fn test_exactly_one_today() {
    let grid = MonthGrid::build(may_14_2024(), Weekday::Sun, may_14_2024_noon());
    let today: Vec<_> = grid.days().iter().filter(|d| d.is_today).collect();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].date, may_14_2024());
}

#[test]
fn test_other_month_has_no_today() {
    let grid = MonthGrid::build(leap_day_2024(), Weekday::Sun, may_14_2024_noon());
    assert!(grid.days().iter().all(|d| !d.is_today));
    assert!(grid.days().iter().all(|d| d.is_past));
    assert_eq!(grid.title(), "February 2024");
}

#[test]
fn test_future_month_is_not_past() {
    let grid = MonthGrid::build(ymd(2024, 7, 1), Weekday::Mon, may_14_2024_noon());
    assert!(grid.days().iter().all(|d| !d.is_past));
}
