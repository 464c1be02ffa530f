//! Due Date Helpers
//!
//! Day-granularity countdown text shown on each row.

use chrono::{Local, NaiveDate};

/// Where a due date falls relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    Today,
    Tomorrow,
    DaysLeft(i64),
}

impl DueStatus {
    pub fn between(due: NaiveDate, today: NaiveDate) -> Self {
        match (due - today).num_days() {
            d if d < 0 => DueStatus::Overdue,
            0 => DueStatus::Today,
            1 => DueStatus::Tomorrow,
            d => DueStatus::DaysLeft(d),
        }
    }
}

impl std::fmt::Display for DueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DueStatus::Overdue => write!(f, "Overdue"),
            DueStatus::Today => write!(f, "Due today"),
            DueStatus::Tomorrow => write!(f, "Due tomorrow"),
            DueStatus::DaysLeft(n) => write!(f, "{} days left", n),
        }
    }
}

pub fn days_remaining(due: NaiveDate, today: NaiveDate) -> String {
    DueStatus::between(due, today).to_string()
}

/// `days_remaining` against the local calendar date
pub fn days_remaining_from_today(due: NaiveDate) -> String {
    days_remaining(due, today())
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse the `YYYY-MM-DD` value of a date input
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_boundaries() {
        let today = day(2024, 10, 25);
        assert_eq!(days_remaining(today, today), "Due today");
        assert_eq!(days_remaining(today + Duration::days(1), today), "Due tomorrow");
        assert_eq!(days_remaining(today - Duration::days(1), today), "Overdue");
        assert_eq!(days_remaining(today + Duration::days(5), today), "5 days left");
    }

    #[test]
    fn test_across_month_end() {
        assert_eq!(days_remaining(day(2024, 11, 1), day(2024, 10, 30)), "2 days left");
        assert_eq!(DueStatus::between(day(2023, 12, 31), day(2024, 1, 1)), DueStatus::Overdue);
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(parse_input_date("2024-10-27"), Some(day(2024, 10, 27)));
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("2024-13-01"), None);
    }
}
