use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parse an optional `YYYY-MM-DD` argument, defaulting to today.
pub fn parse_optional_date(s: Option<&str>) -> AppResult<NaiveDate> {
    match s {
        None => Ok(today()),
        Some(raw) if raw.eq_ignore_ascii_case("today") => Ok(today()),
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
    }
}

/// English weekday name, for sheet headers.
pub fn weekday_name(d: NaiveDate) -> String {
    d.format("%A").to_string()
}
