//! ANSI color helper utilities for terminal output.

use crate::core::stats::AttendanceBand;
use crate::models::AttendanceStatus;
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub fn colour_for_band(band: AttendanceBand) -> Colour {
    match band {
        AttendanceBand::Good => Colour::Green,
        AttendanceBand::Warning => Colour::Yellow,
        AttendanceBand::Low => Colour::Red,
    }
}

/// Percentage rendered bold in the colour of its band, e.g. "83%".
pub fn colorize_percentage(pct: u32, band: AttendanceBand) -> String {
    colour_for_band(band)
        .bold()
        .paint(format!("{pct}%"))
        .to_string()
}

/// Present → green, absent → red, unmarked → grey dash.
pub fn colorize_status(status: Option<AttendanceStatus>) -> String {
    match status {
        Some(AttendanceStatus::Present) => Colour::Green.paint("present").to_string(),
        Some(AttendanceStatus::Absent) => Colour::Red.paint("absent").to_string(),
        None => format!("{GREY}--{RESET}"),
    }
}
