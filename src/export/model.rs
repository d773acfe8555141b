// src/export/model.rs

use crate::models::StudentReport;
use serde::Serialize;

/// Header row of the report, shared by every export format.
pub const REPORT_HEADERS: [&str; 6] = [
    "Roll Number",
    "Student Name",
    "Total Days",
    "Present",
    "Absent",
    "Attendance %",
];

/// Flat report row for export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub student_id: String,
    pub roll_number: String,
    pub student_name: String,
    pub total_days: usize,
    pub present: usize,
    pub absent: usize,
    pub percentage: u32,
}

impl From<&StudentReport> for ReportRow {
    fn from(r: &StudentReport) -> Self {
        Self {
            student_id: r.student.id.clone(),
            roll_number: r.student.roll_no.clone(),
            student_name: r.student.name.clone(),
            total_days: r.total_days,
            present: r.present_days,
            absent: r.absent_days,
            percentage: r.percentage,
        }
    }
}

impl ReportRow {
    /// Cells in `REPORT_HEADERS` order; the percentage carries its `%` sign.
    pub(crate) fn cells(&self) -> [String; 6] {
        [
            self.roll_number.clone(),
            self.student_name.clone(),
            self.total_days.to_string(),
            self.present.to_string(),
            self.absent.to_string(),
            format!("{}%", self.percentage),
        ]
    }
}
