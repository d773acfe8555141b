//! Derived statistics. Pure functions over the two collections, recomputed
//! on every call.

use crate::config::Config;
use crate::models::{AttendanceRecord, AttendanceStatus, DailySnapshot, Student, StudentReport};
use chrono::NaiveDate;

/// `round(100 * part / total)`, rounding halves up; `0` when `total` is `0`.
pub fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * part + total) / (2 * total)) as u32
}

fn count_status(records: &[AttendanceRecord], status: AttendanceStatus) -> usize {
    records.iter().filter(|r| r.status == status).count()
}

/// Share of present records over every stored record, all students combined.
pub fn average_attendance(records: &[AttendanceRecord]) -> u32 {
    percentage(
        count_status(records, AttendanceStatus::Present),
        records.len(),
    )
}

/// Dashboard figures for `day`.
///
/// `total_students` is the whole roster, not only the students marked on
/// that day.
pub fn daily_snapshot(
    students: &[Student],
    records: &[AttendanceRecord],
    day: NaiveDate,
) -> DailySnapshot {
    let today: Vec<AttendanceRecord> = records.iter().filter(|r| r.date == day).cloned().collect();

    DailySnapshot {
        date: day,
        total_students: students.len(),
        present: count_status(&today, AttendanceStatus::Present),
        absent: count_status(&today, AttendanceStatus::Absent),
        average_attendance: average_attendance(records),
    }
}

/// One report per student, in roster order.
pub fn student_reports(students: &[Student], records: &[AttendanceRecord]) -> Vec<StudentReport> {
    students
        .iter()
        .map(|student| {
            let own: Vec<&AttendanceRecord> = records
                .iter()
                .filter(|r| r.student_id == student.id)
                .collect();
            let present_days = own.iter().filter(|r| r.status.is_present()).count();
            let absent_days = own.len() - present_days;

            StudentReport {
                student: student.clone(),
                total_days: own.len(),
                present_days,
                absent_days,
                percentage: percentage(present_days, own.len()),
            }
        })
        .collect()
}

/// Records dated within `from..=to`.
pub fn filter_range(
    records: &[AttendanceRecord],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<AttendanceRecord> {
    records
        .iter()
        .filter(|r| r.date >= from && r.date <= to)
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub good: u32,
    pub warning: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            good: 75,
            warning: 50,
        }
    }
}

impl From<&Config> for Thresholds {
    fn from(cfg: &Config) -> Self {
        Self {
            good: cfg.good_threshold,
            warning: cfg.warning_threshold,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceBand {
    Good,
    Warning,
    Low,
}

impl AttendanceBand {
    pub fn classify(pct: u32, thresholds: Thresholds) -> Self {
        if pct >= thresholds.good {
            AttendanceBand::Good
        } else if pct >= thresholds.warning {
            AttendanceBand::Warning
        } else {
            AttendanceBand::Low
        }
    }
}
