// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

/// Parse a `--range` expression into inclusive date bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
///
/// `None` or `all` means no filtering and yields `Ok(None)`.
pub fn parse_optional_range(r: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match r {
        None => Ok(None),
        Some(r) if r.trim().eq_ignore_ascii_case("all") => Ok(None),
        Some(r) => parse_range(r).map(Some),
    }
}

pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let (start, end) = match r.split_once(':') {
        Some((start_raw, end_raw)) => {
            let start = start_raw.trim();
            let end = end_raw.trim();
            if start.len() != end.len() {
                return Err(invalid(r, "start and end must have same format"));
            }
            (period_bounds(start)?.0, period_bounds(end)?.1)
        }
        None => period_bounds(r.trim())?,
    };

    if start > end {
        return Err(invalid(r, "start is after end"));
    }
    Ok((start, end))
}

/// First and last day of a single YYYY / YYYY-MM / YYYY-MM-DD period.
fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().map_err(|_| invalid(p, "invalid year"))?;
            let first = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(p, "invalid year"))?;
            let last = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(p, "invalid year"))?;
            Ok((first, last))
        }
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
                .map_err(|_| invalid(p, "invalid month"))?;
            Ok((first, last_day_of_month(first)))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").map_err(|_| invalid(p, "invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid(p, "unsupported range format")),
    }
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(first)
}

fn invalid(input: &str, why: &str) -> AppError {
    AppError::InvalidDate(format!("{input} ({why})"))
}
