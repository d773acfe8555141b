use crate::db::{KvBackend, RecordStore};
use crate::errors::{AppError, AppResult};
use crate::models::Student;
use chrono::Utc;

/// High-level business logic for the student roster.
pub struct StudentLogic;

impl StudentLogic {
    /// Register a new student from raw user input.
    ///
    /// Name and roll number are trimmed; either one empty rejects the
    /// submission and nothing is stored.
    pub fn add<B: KvBackend>(
        store: &mut RecordStore<B>,
        name: &str,
        roll_no: &str,
    ) -> AppResult<Student> {
        let name = name.trim();
        let roll_no = roll_no.trim();

        if name.is_empty() || roll_no.is_empty() {
            return Err(AppError::Validation("Please fill in all fields".into()));
        }

        let existing = store.list_students()?;
        let student = Student::new(next_id(&existing), name, roll_no);

        store.add_student(student.clone())?;
        Ok(student)
    }

    /// Delete a student and their records. `Ok(None)` when no student matched.
    pub fn delete<B: KvBackend>(
        store: &mut RecordStore<B>,
        key: &str,
    ) -> AppResult<Option<Student>> {
        let students = store.list_students()?;
        let Some(student) = Self::resolve(&students, key)?.cloned() else {
            return Ok(None);
        };

        store.delete_student(&student.id)?;
        Ok(Some(student))
    }

    /// Find a student by id, falling back to the roll number.
    ///
    /// A roll number shared by several students is rejected with
    /// `AppError::AmbiguousStudent`; an id always identifies one student.
    pub fn resolve<'a>(students: &'a [Student], key: &str) -> AppResult<Option<&'a Student>> {
        let key = key.trim();
        if let Some(student) = students.iter().find(|s| s.id == key) {
            return Ok(Some(student));
        }

        let by_roll: Vec<&Student> = students.iter().filter(|s| s.roll_no == key).collect();
        match by_roll.as_slice() {
            [] => Ok(None),
            [one] => Ok(Some(*one)),
            many => Err(AppError::AmbiguousStudent(
                key.to_string(),
                many.iter().map(|s| s.id.clone()).collect(),
            )),
        }
    }

    pub fn resolve_required<'a>(students: &'a [Student], key: &str) -> AppResult<&'a Student> {
        Self::resolve(students, key)?.ok_or_else(|| AppError::StudentNotFound(key.to_string()))
    }
}

/// Millisecond timestamp id, bumped until it is unused in the roster.
fn next_id(existing: &[Student]) -> String {
    let mut candidate = Utc::now().timestamp_millis();
    while existing.iter().any(|s| s.id == candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
