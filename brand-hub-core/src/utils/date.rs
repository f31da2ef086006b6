//! Expiry date helpers.
//!
//! Resource expiry dates are persisted as plain `YYYY-MM-DD` strings; these helpers
//! parse them into `NaiveDate` for validation and reporting.

use chrono::NaiveDate;

use crate::error::{CoreError, CoreResult};

/// Persisted expiry format.
pub const EXPIRY_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` expiry string.
pub fn parse_expiry(value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), EXPIRY_FORMAT).map_err(|e| {
        CoreError::ValidationError(format!("Invalid expiry date '{value}': {e}"))
    })
}

/// Whole days from `today` until `date` (negative when already past).
#[must_use]
pub fn days_until(today: NaiveDate, date: NaiveDate) -> i64 {
    (date - today).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = parse_expiry("2024-12-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 12, 15).unwrap());
    }

    #[test]
    fn rejects_other_formats() {
        assert!(matches!(
            parse_expiry("15/12/2024"),
            Err(CoreError::ValidationError(_))
        ));
        assert!(parse_expiry("2024-02-30").is_err());
    }

    #[test]
    fn counts_days() {
        let today = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        let later = NaiveDate::from_ymd_opt(2024, 8, 25).unwrap();
        assert_eq!(days_until(today, later), 24);
        assert_eq!(days_until(later, today), -24);
    }
}
