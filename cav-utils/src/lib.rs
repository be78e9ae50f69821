//! Shared utility functions for climate anomaly viewer crates.

/// Year/month period helpers
pub mod dates {
    use crate::error::PeriodError;
    use chrono::{Months, NaiveDate};

    /// First day of the given month.
    pub fn period_start(year: i32, month: u32) -> Result<NaiveDate, PeriodError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| PeriodError(format!("{}-{:02} is not a valid month", year, month)))
    }

    /// Move a (year, month) period by `delta` months, carrying into the year.
    /// e.g., (2000, 12) + 1 -> (2001, 1), (2000, 1) - 1 -> (1999, 12)
    pub fn step_month(year: i32, month: u32, delta: i32) -> Result<(i32, u32), PeriodError> {
        use chrono::Datelike;
        let start = period_start(year, month)?;
        let months = Months::new(delta.unsigned_abs());
        let moved = if delta >= 0 {
            start.checked_add_months(months)
        } else {
            start.checked_sub_months(months)
        };
        moved
            .map(|d| (d.year(), d.month()))
            .ok_or_else(|| PeriodError(format!("{}-{:02} moved by {} months is out of range", year, month, delta)))
    }

    /// Format a period as "January 2000".
    pub fn format_period(year: i32, month: u32) -> Result<String, PeriodError> {
        let start = period_start(year, month)?;
        Ok(format!("{} {}", month_name(month)?, start.format("%Y")))
    }

    /// Full English month name for 1-12.
    pub fn month_name(month: u32) -> Result<&'static str, PeriodError> {
        u8::try_from(month)
            .ok()
            .and_then(|m| chrono::Month::try_from(m).ok())
            .map(|m| m.name())
            .ok_or_else(|| PeriodError(format!("{} is not a month number", month)))
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_step_month_carries_year() {
            assert_eq!(step_month(2000, 12, 1).unwrap(), (2001, 1));
            assert_eq!(step_month(2000, 1, -1).unwrap(), (1999, 12));
            assert_eq!(step_month(2000, 6, 0).unwrap(), (2000, 6));
            assert_eq!(step_month(2000, 3, -15).unwrap(), (1998, 12));
            assert_eq!(step_month(2000, 3, 24).unwrap(), (2002, 3));
        }

        #[test]
        fn test_step_month_rejects_bad_month() {
            assert!(step_month(2000, 13, 1).is_err());
            assert!(step_month(2000, 0, 1).is_err());
        }

        #[test]
        fn test_format_period() {
            assert_eq!(format_period(2000, 1).unwrap(), "January 2000");
            assert_eq!(month_name(12).unwrap(), "December");
            assert!(month_name(0).is_err());
        }
    }
}

/// Error types
pub mod error {
    use std::fmt;

    #[derive(Debug, Clone, PartialEq)]
    pub struct PeriodError(pub String);

    impl fmt::Display for PeriodError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Period error: {}", self.0)
        }
    }

    impl std::error::Error for PeriodError {}
}
