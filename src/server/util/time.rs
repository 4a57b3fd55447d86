//! Date handling for backdated loot receipts.
//!
//! Receipt dates are submitted as `YYYY-MM-DD`. A date is accepted when it falls strictly after
//! the game's launch cutoff and strictly before tomorrow, which means today is the latest
//! valid receipt date.

use chrono::{NaiveDate, NaiveDateTime};

/// Receipt dates must be after this day
pub fn earliest_receipt_cutoff() -> NaiveDate {
    NaiveDate::from_ymd_opt(2004, 9, 22).unwrap_or(NaiveDate::MIN)
}

/// Parses a submitted receipt date and checks it lies within the accepted window.
///
/// # Arguments
/// - `value` - Submitted value, expected as `YYYY-MM-DD`
/// - `today` - Current date, the latest accepted value
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed date within the window
/// - `Err(String)` - Message describing why the date was rejected
pub fn parse_receipt_date(value: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| "is not a valid date, expected YYYY-MM-DD".to_string())?;

    if date <= earliest_receipt_cutoff() {
        return Err(format!(
            "must be a date after {}",
            earliest_receipt_cutoff().format("%Y-%m-%d")
        ));
    }

    if date > today {
        return Err("must be a date before tomorrow".to_string());
    }

    Ok(date)
}

/// Midnight of a receipt date, the stored `received_at` value for backdated entries
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}
