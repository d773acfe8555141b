use chrono::NaiveDate;
use rattendance::db::store::{RECORDS_KEY, STUDENTS_KEY};
use rattendance::db::{JsonFileBackend, KvBackend, MemoryBackend, RecordStore, SqliteBackend};
use rattendance::errors::AppError;
use rattendance::models::{AttendanceRecord, AttendanceStatus, Student};
use std::env;
use std::fs;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn json_path(name: &str) -> String {
    let mut path = env::temp_dir();
    path.push(format!("{}_rattendance_store.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Students A (roll 1) and B (roll 2), A present and B absent on 2024-01-01.
fn seed<B: KvBackend>(store: &mut RecordStore<B>) {
    store.add_student(Student::new("a", "Alice", "1")).unwrap();
    store.add_student(Student::new("b", "Bob", "2")).unwrap();
    store
        .mark_attendance("a", day(2024, 1, 1), AttendanceStatus::Present)
        .unwrap();
    store
        .mark_attendance("b", day(2024, 1, 1), AttendanceStatus::Absent)
        .unwrap();
}

fn check_cascade<B: KvBackend>(mut store: RecordStore<B>) {
    seed(&mut store);
    assert_eq!(store.list_attendance_records().unwrap().len(), 2);

    assert!(store.delete_student("a").unwrap());

    let students = store.list_students().unwrap();
    assert_eq!(students, vec![Student::new("b", "Bob", "2")]);

    let records = store.list_attendance_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].student_id, "b");
}

#[test]
fn test_empty_storage_reads_as_empty_collections() {
    let mem = RecordStore::new(MemoryBackend::new());
    assert!(mem.list_students().unwrap().is_empty());
    assert!(mem.list_attendance_records().unwrap().is_empty());

    let sqlite = RecordStore::new(SqliteBackend::in_memory().unwrap());
    assert!(sqlite.list_students().unwrap().is_empty());
    assert!(sqlite.list_attendance_records().unwrap().is_empty());

    let json = RecordStore::new(JsonFileBackend::new(json_path("empty")));
    assert!(json.list_students().unwrap().is_empty());
    assert!(json.list_attendance_records().unwrap().is_empty());
}

#[test]
fn test_add_student_appends_in_order() {
    let mut store = RecordStore::new(MemoryBackend::new());
    store.add_student(Student::new("1", "Zoe", "9")).unwrap();
    store.add_student(Student::new("2", "Adam", "3")).unwrap();

    let names: Vec<String> = store
        .list_students()
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Zoe", "Adam"]);
}

#[test]
fn test_cascade_delete_memory() {
    check_cascade(RecordStore::new(MemoryBackend::new()));
}

#[test]
fn test_cascade_delete_sqlite() {
    check_cascade(RecordStore::new(SqliteBackend::in_memory().unwrap()));
}

#[test]
fn test_cascade_delete_json_file() {
    check_cascade(RecordStore::new(JsonFileBackend::new(json_path("cascade"))));
}

#[test]
fn test_delete_unknown_student_is_noop() {
    let mut store = RecordStore::new(MemoryBackend::new());
    seed(&mut store);

    assert!(!store.delete_student("nobody").unwrap());
    assert_eq!(store.list_students().unwrap().len(), 2);
    assert_eq!(store.list_attendance_records().unwrap().len(), 2);
}

#[test]
fn test_mark_attendance_upserts_last_status_wins() {
    let mut store = RecordStore::new(SqliteBackend::in_memory().unwrap());
    store.add_student(Student::new("a", "Alice", "1")).unwrap();

    store
        .mark_attendance("a", day(2024, 3, 4), AttendanceStatus::Present)
        .unwrap();
    store
        .mark_attendance("a", day(2024, 3, 4), AttendanceStatus::Absent)
        .unwrap();

    let records = store.list_attendance_records().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, AttendanceStatus::Absent);
    assert_eq!(records[0].id, "a-2024-03-04");
}

#[test]
fn test_mark_many_writes_one_record_per_student() {
    let mut store = RecordStore::new(MemoryBackend::new());
    store
        .mark_many(
            day(2024, 1, 2),
            &[
                ("a".to_string(), AttendanceStatus::Present),
                ("b".to_string(), AttendanceStatus::Absent),
                ("a".to_string(), AttendanceStatus::Absent),
            ],
        )
        .unwrap();

    let records = store.get_attendance_for_date(day(2024, 1, 2)).unwrap();
    assert_eq!(records.len(), 2);
    let a = records.iter().find(|r| r.student_id == "a").unwrap();
    assert_eq!(a.status, AttendanceStatus::Absent);
}

#[test]
fn test_get_attendance_filters() {
    let mut store = RecordStore::new(MemoryBackend::new());
    seed(&mut store);
    store
        .mark_attendance("a", day(2024, 1, 2), AttendanceStatus::Absent)
        .unwrap();

    let jan1 = store.get_attendance_for_date(day(2024, 1, 1)).unwrap();
    assert_eq!(jan1.len(), 2);
    assert!(jan1.iter().all(|r| r.date == day(2024, 1, 1)));

    let alice = store.get_attendance_for_student("a").unwrap();
    assert_eq!(alice.len(), 2);
    assert!(alice.iter().all(|r| r.student_id == "a"));

    assert!(store.get_attendance_for_date(day(2023, 12, 31)).unwrap().is_empty());
}

#[test]
fn test_save_records_replaces_collection() {
    let mut store = RecordStore::new(MemoryBackend::new());
    seed(&mut store);

    let only = vec![AttendanceRecord::new(
        "b",
        day(2024, 2, 1),
        AttendanceStatus::Present,
    )];
    store.save_attendance_records(&only).unwrap();

    assert_eq!(store.list_attendance_records().unwrap(), only);
}

#[test]
fn test_quota_exceeded_propagates_and_keeps_previous_data() {
    let mut store = RecordStore::new(MemoryBackend::with_quota(200));
    store.add_student(Student::new("a", "Alice", "1")).unwrap();

    let huge = "x".repeat(500);
    let err = store
        .add_student(Student::new("b", huge, "2"))
        .unwrap_err();
    assert!(matches!(err, AppError::StorageFull { .. }));

    let students = store.list_students().unwrap();
    assert_eq!(students, vec![Student::new("a", "Alice", "1")]);
}

#[test]
fn test_persisted_layout_uses_fixed_keys_and_field_names() {
    let mut store = RecordStore::new(MemoryBackend::new());
    seed(&mut store);

    let keys = store.backend().keys().unwrap();
    assert_eq!(keys, vec![RECORDS_KEY.to_string(), STUDENTS_KEY.to_string()]);

    let raw_students = store.backend().get(STUDENTS_KEY).unwrap().unwrap();
    assert!(raw_students.contains("\"rollNo\":\"1\""));

    let raw_records = store.backend().get(RECORDS_KEY).unwrap().unwrap();
    assert!(raw_records.contains("\"studentId\":\"a\""));
    assert!(raw_records.contains("\"date\":\"2024-01-01\""));
    assert!(raw_records.contains("\"status\":\"present\""));
}

#[test]
fn test_json_file_backend_survives_reopen() {
    let path = json_path("reopen");
    {
        let mut store = RecordStore::new(JsonFileBackend::new(&path));
        seed(&mut store);
    }

    let store = RecordStore::new(JsonFileBackend::new(&path));
    assert_eq!(store.list_students().unwrap().len(), 2);
    assert_eq!(store.list_attendance_records().unwrap().len(), 2);
}

#[test]
fn test_malformed_stored_value_is_an_error() {
    let mut backend = MemoryBackend::new();
    backend.set(STUDENTS_KEY, "not json".to_string()).unwrap();

    let store = RecordStore::new(backend);
    assert!(matches!(store.list_students(), Err(AppError::Json(_))));
}

#[test]
fn test_failed_multi_key_write_leaves_both_keys_untouched() {
    let mut store = RecordStore::new(JsonFileBackend::new(json_path("atomic")));
    seed(&mut store);
    let students = store.list_students().unwrap();
    let records = store.list_attendance_records().unwrap();

    let backend = store.backend_mut();
    let result = backend.set_many(&[
        (STUDENTS_KEY, "[]".to_string()),
        (RECORDS_KEY, "{ not json".to_string()),
    ]);
    assert!(result.is_err());

    assert_eq!(store.list_students().unwrap(), students);
    assert_eq!(store.list_attendance_records().unwrap(), records);
}

#[test]
fn test_sqlite_cascade_rolls_back_when_records_write_fails() {
    let mut store = RecordStore::new(SqliteBackend::in_memory().unwrap());
    seed(&mut store);
    let students = store.list_students().unwrap();
    let records = store.list_attendance_records().unwrap();

    // students are written first; refuse the records row afterwards
    store
        .backend_mut()
        .pool_mut()
        .conn
        .execute_batch(
            "CREATE TRIGGER refuse_records_insert BEFORE INSERT ON kv_store
             WHEN NEW.key = 'attendance_records'
             BEGIN SELECT RAISE(ABORT, 'refused'); END;
             CREATE TRIGGER refuse_records_update BEFORE UPDATE ON kv_store
             WHEN NEW.key = 'attendance_records'
             BEGIN SELECT RAISE(ABORT, 'refused'); END;",
        )
        .unwrap();

    assert!(matches!(store.delete_student("a"), Err(AppError::Db(_))));

    assert_eq!(store.list_students().unwrap(), students);
    assert_eq!(store.list_attendance_records().unwrap(), records);
}
