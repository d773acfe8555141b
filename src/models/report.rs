use super::student::Student;
use chrono::NaiveDate;
use serde::Serialize;

/// Per-student aggregate over the stored attendance records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentReport {
    pub student: Student,
    pub total_days: usize,
    pub present_days: usize,
    pub absent_days: usize,
    pub percentage: u32,
}

/// Figures shown on the dashboard for a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailySnapshot {
    pub date: NaiveDate,
    pub total_students: usize,
    pub present: usize,
    pub absent: usize,
    pub average_attendance: u32,
}
