//! Strict ISO `YYYY-MM-DD` calendar dates.
//!
//! Callers cache and compare results by the literal date string, so only the
//! zero-padded ten-character form is accepted and every output echoes it back
//! in the same form.

use chrono::NaiveDate;

use crate::error::{CoreError, Result};

pub const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` string.
pub fn parse_iso_date(field: &str, text: &str) -> Result<NaiveDate> {
    let bytes = text.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !well_formed {
        return Err(CoreError::invalid(
            field,
            format!("'{text}' is not a YYYY-MM-DD date"),
        ));
    }
    NaiveDate::parse_from_str(text, ISO_FORMAT)
        .map_err(|e| CoreError::invalid(field, format!("'{text}': {e}")))
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Validate a civil (year, month, day).
pub fn civil_date(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CoreError::invalid("birth_date", format!("{year}-{month}-{day} is not a calendar date"))
    })
}
