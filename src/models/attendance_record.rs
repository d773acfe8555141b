use super::attendance_status::AttendanceStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One student's status on one calendar day.
///
/// `date` is stored as an ISO `YYYY-MM-DD` string; `id` is always
/// `"{student_id}-{date}"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub student_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

impl AttendanceRecord {
    pub fn new(student_id: &str, date: NaiveDate, status: AttendanceStatus) -> Self {
        Self {
            id: Self::make_id(student_id, date),
            student_id: student_id.to_string(),
            date,
            status,
        }
    }

    /// Deterministic record id for a `(student, date)` pair.
    pub fn make_id(student_id: &str, date: NaiveDate) -> String {
        format!("{}-{}", student_id, date.format("%Y-%m-%d"))
    }

    pub fn matches(&self, student_id: &str, date: NaiveDate) -> bool {
        self.student_id == student_id && self.date == date
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
