//! Parsing of user-supplied fields into record values.

use crate::constants;
use crate::core::error::ValidationError;
use chrono::NaiveDate;

pub fn parse_name(s: &str) -> Result<String, ValidationError> {
    let name = s.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(name.to_string())
}

/// Calendar date as `YYYY-MM-DD`. The year must be exactly four digits; chrono's
/// `%Y` alone would also take a sign or a fifth digit.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    let text = s.trim();
    let bytes = text.as_bytes();
    if bytes.len() < 5 || !bytes[..4].iter().all(u8::is_ascii_digit) || bytes[4] != b'-' {
        return Err(ValidationError::InvalidDate(text.to_string()));
    }
    NaiveDate::parse_from_str(text, constants::DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidDate(text.to_string()))
}

/// Rotation interval in days: digits only, at least 1.
pub fn parse_rotation_days(s: &str) -> Result<u32, ValidationError> {
    let text = s.trim();
    let invalid = || ValidationError::InvalidInterval(text.to_string());
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match text.parse::<u32>() {
        Ok(days) if days >= 1 => Ok(days),
        _ => Err(invalid()),
    }
}

/// 1-based position as typed by the user. Range is checked against the snapshot later.
pub fn parse_position(s: &str) -> Result<i64, ValidationError> {
    let text = s.trim();
    text.parse::<i64>()
        .map_err(|_| ValidationError::InvalidPosition(text.to_string()))
}
