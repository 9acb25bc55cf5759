// src/datekey.rs
//! Calendar day and month keys.
//!
//! Day-keys are the join values shared by habits, health, finance, events
//! and the journal. They sort lexicographically in chronological order, and
//! a month-key is always a strict prefix of every day-key in that month --
//! the finance month filter relies on that prefix property.

use chrono::{NaiveDate, Utc};

/// Key for one calendar day, e.g. "2024-03-15"
pub fn day_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Key for one calendar month, e.g. "2024-03"
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// The current calendar day, derived from UTC so the key is timezone-stable
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_key_format() {
        assert_eq!(day_key(date(2024, 3, 5)), "2024-03-05");
        assert_eq!(day_key(date(1999, 12, 31)), "1999-12-31");
    }

    #[test]
    fn test_month_key_format() {
        assert_eq!(month_key(date(2024, 3, 5)), "2024-03");
    }

    #[test]
    fn test_month_key_is_prefix_of_day_key() {
        for (y, m, d) in [(2024, 1, 1), (2024, 2, 29), (2031, 11, 30), (1970, 6, 15)] {
            let dt = date(y, m, d);
            assert!(day_key(dt).starts_with(&month_key(dt)));
        }
    }

    #[test]
    fn test_day_keys_sort_chronologically() {
        let a = day_key(date(2024, 9, 30));
        let b = day_key(date(2024, 10, 1));
        assert!(a < b);
    }
}
