//! Consistency checks over the stored collections.

use crate::db::backend::KvBackend;
use crate::db::initialize::{KV_TABLE, kv_table_exists};
use crate::db::pool::DbPool;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::models::AttendanceRecord;
use chrono::NaiveDate;
use std::collections::HashSet;

#[derive(Debug, Default)]
pub struct IntegrityReport {
    pub students: usize,
    pub records: usize,
    pub duplicate_student_ids: Vec<String>,
    /// Records whose `student_id` matches no stored student.
    pub orphan_records: Vec<AttendanceRecord>,
    /// `(student_id, date)` pairs stored more than once.
    pub duplicate_pairs: Vec<(String, NaiveDate)>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.duplicate_student_ids.is_empty()
            && self.orphan_records.is_empty()
            && self.duplicate_pairs.is_empty()
    }
}

/// Parse both collections and look for broken invariants.
/// A malformed stored value is returned as an error, not as a finding.
pub fn check_store<B: KvBackend>(store: &RecordStore<B>) -> AppResult<IntegrityReport> {
    let students = store.list_students()?;
    let records = store.list_attendance_records()?;

    let mut report = IntegrityReport {
        students: students.len(),
        records: records.len(),
        ..Default::default()
    };

    let mut ids = HashSet::new();
    for s in &students {
        if !ids.insert(s.id.as_str()) {
            report.duplicate_student_ids.push(s.id.clone());
        }
    }

    let mut pairs = HashSet::new();
    for r in &records {
        if !ids.contains(r.student_id.as_str()) {
            report.orphan_records.push(r.clone());
        }
        if !pairs.insert((r.student_id.as_str(), r.date)) {
            report.duplicate_pairs.push((r.student_id.clone(), r.date));
        }
    }

    Ok(report)
}

/// Drop records that reference no stored student. Returns how many were removed.
pub fn prune_orphans<B: KvBackend>(store: &mut RecordStore<B>) -> AppResult<usize> {
    let ids: HashSet<String> = store.list_students()?.into_iter().map(|s| s.id).collect();

    let mut records = store.list_attendance_records()?;
    let before = records.len();
    records.retain(|r| ids.contains(&r.student_id));
    let removed = before - records.len();

    if removed > 0 {
        store.save_attendance_records(&records)?;
    }
    Ok(removed)
}

/// SQLite-level check of a storage file: the key-value table must exist and
/// `PRAGMA integrity_check` must report `ok`. Returns the problems found.
pub fn sqlite_integrity(path: &str) -> AppResult<Vec<String>> {
    let pool = DbPool::open(path)?;
    let mut problems = Vec::new();

    if !kv_table_exists(&pool.conn)? {
        problems.push(format!("table '{}' is missing", KV_TABLE));
    }

    let mut stmt = pool.conn.prepare("PRAGMA integrity_check")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    for r in rows {
        let line = r?;
        if line != "ok" {
            problems.push(line);
        }
    }

    Ok(problems)
}
