use crate::core::students::StudentLogic;
use crate::db::{KvBackend, RecordStore};
use crate::errors::{AppError, AppResult};
use crate::models::{AttendanceRecord, AttendanceStatus, Student};
use crate::utils::date;
use chrono::NaiveDate;
use std::collections::HashMap;

/// A roster entry joined with its status on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    pub student: Student,
    pub status: Option<AttendanceStatus>,
}

/// High-level business logic for marking attendance.
pub struct AttendanceLogic;

impl AttendanceLogic {
    /// Mark the given students present/absent on `day`; returns what was stored.
    ///
    /// Keys are student ids or roll numbers. Future days, unknown students and
    /// a student listed under both statuses are rejected before anything is
    /// written.
    pub fn mark<B: KvBackend>(
        store: &mut RecordStore<B>,
        day: NaiveDate,
        present: &[String],
        absent: &[String],
    ) -> AppResult<Vec<(Student, AttendanceStatus)>> {
        ensure_not_future(day)?;

        if present.is_empty() && absent.is_empty() {
            return Err(AppError::Validation(
                "Nothing to mark: pass --present, --absent, --toggle or --all-present".into(),
            ));
        }

        let students = store.list_students()?;
        let mut planned: Vec<(Student, AttendanceStatus)> = Vec::new();

        for (keys, status) in [
            (present, AttendanceStatus::Present),
            (absent, AttendanceStatus::Absent),
        ] {
            for key in keys {
                let student = StudentLogic::resolve_required(&students, key)?;
                let previous = planned
                    .iter()
                    .find(|(s, _)| s.id == student.id)
                    .map(|(_, st)| *st);
                match previous {
                    Some(prev) if prev != status => {
                        return Err(AppError::Validation(format!(
                            "Student '{}' cannot be both present and absent",
                            student.name
                        )));
                    }
                    Some(_) => {}
                    None => planned.push((student.clone(), status)),
                }
            }
        }

        apply(store, day, &planned)?;
        Ok(planned)
    }

    /// Mark every registered student present on `day`.
    pub fn mark_all_present<B: KvBackend>(
        store: &mut RecordStore<B>,
        day: NaiveDate,
    ) -> AppResult<Vec<(Student, AttendanceStatus)>> {
        ensure_not_future(day)?;

        let planned: Vec<(Student, AttendanceStatus)> = store
            .list_students()?
            .into_iter()
            .map(|s| (s, AttendanceStatus::Present))
            .collect();

        apply(store, day, &planned)?;
        Ok(planned)
    }

    /// Flip a student's status on `day`; an unmarked student becomes present.
    pub fn toggle<B: KvBackend>(
        store: &mut RecordStore<B>,
        day: NaiveDate,
        key: &str,
    ) -> AppResult<(Student, AttendanceStatus)> {
        ensure_not_future(day)?;

        let students = store.list_students()?;
        let student = StudentLogic::resolve_required(&students, key)?.clone();

        let next = current_status(&store.get_attendance_for_date(day)?, &student.id)
            .map(|s| s.toggled())
            .unwrap_or(AttendanceStatus::Present);

        store.mark_attendance(&student.id, day, next)?;
        Ok((student, next))
    }

    /// The whole roster with each student's status on `day`.
    pub fn sheet<B: KvBackend>(store: &RecordStore<B>, day: NaiveDate) -> AppResult<Vec<SheetRow>> {
        let by_student: HashMap<String, AttendanceStatus> = store
            .get_attendance_for_date(day)?
            .into_iter()
            .map(|r| (r.student_id, r.status))
            .collect();

        Ok(store
            .list_students()?
            .into_iter()
            .map(|student| SheetRow {
                status: by_student.get(&student.id).copied(),
                student,
            })
            .collect())
    }

    /// A student's records sorted by date.
    pub fn history<B: KvBackend>(
        store: &RecordStore<B>,
        key: &str,
    ) -> AppResult<(Student, Vec<AttendanceRecord>)> {
        let students = store.list_students()?;
        let student = StudentLogic::resolve_required(&students, key)?.clone();

        let mut records = store.get_attendance_for_student(&student.id)?;
        records.sort_by_key(|r| r.date);
        Ok((student, records))
    }
}

fn current_status(records: &[AttendanceRecord], student_id: &str) -> Option<AttendanceStatus> {
    records
        .iter()
        .find(|r| r.student_id == student_id)
        .map(|r| r.status)
}

fn ensure_not_future(day: NaiveDate) -> AppResult<()> {
    if day > date::today() {
        return Err(AppError::FutureDate(day.to_string()));
    }
    Ok(())
}

fn apply<B: KvBackend>(
    store: &mut RecordStore<B>,
    day: NaiveDate,
    planned: &[(Student, AttendanceStatus)],
) -> AppResult<()> {
    let entries: Vec<(String, AttendanceStatus)> = planned
        .iter()
        .map(|(s, status)| (s.id.clone(), *status))
        .collect();
    store.mark_many(day, &entries)
}
