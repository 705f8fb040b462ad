//! Calendar Grid
//!
//! Month math for the calendar view: a month rendered as full weeks
//! (Sunday-first), padded with `None` outside the month.

use chrono::{Datelike, Duration, NaiveDate};

/// `YYYY-MM-DD`, the same key shape the milestone index uses.
pub fn day_key(day: NaiveDate) -> String {
    day.format("%Y-%m-%d").to_string()
}

pub fn month_title(year: i32, month: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(first) => first.format("%B %Y").to_string(),
        None => String::new(),
    }
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// Weeks of a month, Sunday-first; slots outside the month are `None`.
pub fn month_weeks(year: i32, month: u32) -> Vec<Vec<Option<NaiveDate>>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let (next_y, next_m) = next_month(year, month);
    let Some(first_of_next) = NaiveDate::from_ymd_opt(next_y, next_m, 1) else {
        return Vec::new();
    };
    let last = first_of_next - Duration::days(1);

    let mut day = first - Duration::days(first.weekday().num_days_from_sunday() as i64);
    let mut weeks = Vec::new();
    while day <= last {
        let week = (0..7)
            .map(|_| {
                let current = day;
                day += Duration::days(1);
                (current.month() == month).then_some(current)
            })
            .collect();
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_weeks_cover_every_day_exactly_once() {
        let weeks = month_weeks(2026, 2);
        let days: Vec<NaiveDate> = weeks.iter().flatten().flatten().copied().collect();
        assert_eq!(days.len(), 28);
        assert_eq!(days[0], NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(*days.last().unwrap(), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
    }

    #[test]
    fn test_weeks_are_sunday_aligned() {
        // March 2026 starts on a Sunday
        let weeks = month_weeks(2026, 3);
        assert_eq!(weeks[0][0], NaiveDate::from_ymd_opt(2026, 3, 1));

        // May 2026 starts on a Friday: five leading pads
        let weeks = month_weeks(2026, 5);
        assert!(weeks[0][..5].iter().all(Option::is_none));
        assert_eq!(weeks[0][5], NaiveDate::from_ymd_opt(2026, 5, 1));
    }

    #[test]
    fn test_every_week_has_seven_slots() {
        for (year, month) in [(2026, 1), (2026, 2), (2024, 2), (2025, 12)] {
            for week in month_weeks(year, month) {
                assert_eq!(week.len(), 7);
            }
        }
    }

    #[test]
    fn test_month_navigation_wraps_year() {
        assert_eq!(prev_month(2026, 1), (2025, 12));
        assert_eq!(next_month(2026, 12), (2027, 1));
        assert_eq!(next_month(2026, 6), (2026, 7));
    }

    #[test]
    fn test_day_key_matches_index_keys() {
        let day = NaiveDate::from_ymd_opt(2026, 4, 2).unwrap();
        assert_eq!(day_key(day), "2026-04-02");
    }
}
