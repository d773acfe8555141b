//! Record store: the student roster and the attendance records, each kept as
//! one JSON array under a fixed key of a [`KvBackend`].
//!
//! Every operation reads or rewrites a whole collection; nothing is cached
//! between calls.

use crate::db::backend::KvBackend;
use crate::errors::AppResult;
use crate::models::{AttendanceRecord, AttendanceStatus, Student};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Key holding the serialized student list.
pub const STUDENTS_KEY: &str = "attendance_students";
/// Key holding the serialized attendance record list.
pub const RECORDS_KEY: &str = "attendance_records";

pub struct RecordStore<B: KvBackend> {
    backend: B,
}

impl<B: KvBackend> RecordStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    // ---------------------------
    // Students
    // ---------------------------

    /// All stored students, in insertion order. Empty when nothing was saved yet.
    pub fn list_students(&self) -> AppResult<Vec<Student>> {
        self.load(STUDENTS_KEY)
    }

    pub fn save_students(&mut self, students: &[Student]) -> AppResult<()> {
        self.backend.set(STUDENTS_KEY, serde_json::to_string(students)?)
    }

    /// Append a student. Ids are not checked for duplicates here.
    pub fn add_student(&mut self, student: Student) -> AppResult<()> {
        let mut students = self.list_students()?;
        debug!(id = %student.id, "adding student");
        students.push(student);
        self.save_students(&students)
    }

    /// Remove a student together with all of their attendance records.
    ///
    /// Both collections are written in one backend call. Unknown ids are a
    /// no-op; the return value tells whether a student was removed.
    pub fn delete_student(&mut self, id: &str) -> AppResult<bool> {
        let mut students = self.list_students()?;
        let before = students.len();
        students.retain(|s| s.id != id);
        let removed = students.len() != before;

        let mut records = self.list_attendance_records()?;
        let records_before = records.len();
        records.retain(|r| r.student_id != id);

        if !removed && records.len() == records_before {
            return Ok(false);
        }

        debug!(
            id,
            records_removed = records_before - records.len(),
            "deleting student"
        );

        self.backend.set_many(&[
            (STUDENTS_KEY, serde_json::to_string(&students)?),
            (RECORDS_KEY, serde_json::to_string(&records)?),
        ])?;

        Ok(removed)
    }

    // ---------------------------
    // Attendance records
    // ---------------------------

    pub fn list_attendance_records(&self) -> AppResult<Vec<AttendanceRecord>> {
        self.load(RECORDS_KEY)
    }

    pub fn save_attendance_records(&mut self, records: &[AttendanceRecord]) -> AppResult<()> {
        self.backend.set(RECORDS_KEY, serde_json::to_string(records)?)
    }

    /// Upsert keyed by `(student_id, date)`: overwrite the status of an
    /// existing record, or append a new one.
    pub fn mark_attendance(
        &mut self,
        student_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> AppResult<()> {
        let mut records = self.list_attendance_records()?;
        upsert(&mut records, student_id, date, status);
        self.save_attendance_records(&records)
    }

    /// Upsert several statuses for the same day with a single write.
    pub fn mark_many(
        &mut self,
        date: NaiveDate,
        entries: &[(String, AttendanceStatus)],
    ) -> AppResult<()> {
        let mut records = self.list_attendance_records()?;
        for (student_id, status) in entries {
            upsert(&mut records, student_id, date, *status);
        }
        self.save_attendance_records(&records)
    }

    pub fn get_attendance_for_date(&self, date: NaiveDate) -> AppResult<Vec<AttendanceRecord>> {
        Ok(self
            .list_attendance_records()?
            .into_iter()
            .filter(|r| r.date == date)
            .collect())
    }

    pub fn get_attendance_for_student(&self, student_id: &str) -> AppResult<Vec<AttendanceRecord>> {
        Ok(self
            .list_attendance_records()?
            .into_iter()
            .filter(|r| r.student_id == student_id)
            .collect())
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> AppResult<Vec<T>> {
        match self.backend.get(key)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(Vec::new()),
        }
    }
}

fn upsert(
    records: &mut Vec<AttendanceRecord>,
    student_id: &str,
    date: NaiveDate,
    status: AttendanceStatus,
) {
    match records.iter_mut().find(|r| r.matches(student_id, date)) {
        Some(existing) => existing.status = status,
        None => records.push(AttendanceRecord::new(student_id, date, status)),
    }
}
