mod common;
use common::{
    init_db_with_data, init_db_with_students, rat, setup_test_db, setup_test_storage, temp_out,
};
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_init_creates_storage() {
    let db_path = setup_test_db("init_creates_storage");

    rat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Storage initialized"));

    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_students() {
    let db_path = setup_test_db("add_and_list_students");
    init_db_with_students(&db_path);

    rat()
        .args(["--db", &db_path, "students"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Bob"));
}

#[test]
fn test_add_rejects_blank_name() {
    let db_path = setup_test_db("add_rejects_blank_name");
    init_db_with_students(&db_path);

    rat()
        .args(["--db", &db_path, "add", "   ", "3"])
        .assert()
        .failure()
        .stderr(contains("Please fill in all fields"));

    rat()
        .args(["--db", &db_path, "students"])
        .assert()
        .success()
        .stdout(contains("2 students"));
}

#[test]
fn test_mark_reports_counts() {
    let db_path = setup_test_db("mark_reports_counts");
    init_db_with_students(&db_path);

    rat()
        .args([
            "--db",
            &db_path,
            "mark",
            "--date",
            "2024-01-01",
            "--present",
            "1",
            "--absent",
            "2",
        ])
        .assert()
        .success()
        .stdout(contains("1 present, 1 absent"));

    rat()
        .args(["--db", &db_path, "show", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("present"))
        .stdout(contains("absent"));
}

#[test]
fn test_mark_future_date_fails() {
    let db_path = setup_test_db("mark_future_date_fails");
    init_db_with_students(&db_path);

    rat()
        .args(["--db", &db_path, "mark", "--date", "2999-01-01", "--present", "1"])
        .assert()
        .failure()
        .stderr(contains("future date"));
}

#[test]
fn test_mark_unknown_student_fails() {
    let db_path = setup_test_db("mark_unknown_student_fails");
    init_db_with_students(&db_path);

    rat()
        .args(["--db", &db_path, "mark", "--date", "2024-01-01", "--present", "42"])
        .assert()
        .failure()
        .stderr(contains("No student found for '42'"));
}

#[test]
fn test_report_shows_percentages() {
    let db_path = setup_test_db("report_shows_percentages");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("100%"))
        .stdout(contains("0%"));
}

#[test]
fn test_report_empty_roster() {
    let db_path = setup_test_db("report_empty_roster");

    rat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "report"])
        .assert()
        .success()
        .stdout(contains("No attendance records found"));
}

#[test]
fn test_dashboard_quick_start_when_empty() {
    let db_path = setup_test_db("dashboard_quick_start");

    rat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "dashboard"])
        .assert()
        .success()
        .stdout(contains("Total Students"))
        .stdout(contains("Quick start"));
}

#[test]
fn test_export_csv_header_and_rows() {
    let db_path = setup_test_db("export_csv_header_and_rows");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_header_and_rows", "csv");

    rat()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines[0],
        "Roll Number,Student Name,Total Days,Present,Absent,Attendance %"
    );
    assert_eq!(lines[1], "1,Alice,1,1,0,100%");
    assert_eq!(lines[2], "2,Bob,1,0,1,0%");
}

#[test]
fn test_export_csv_range_excludes_other_days() {
    let db_path = setup_test_db("export_csv_range");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_range", "csv");

    rat()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--range", "2023",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("1,Alice,0,0,0,0%"));
}

#[test]
fn test_export_json_and_xlsx() {
    let db_path = setup_test_db("export_json_and_xlsx");
    init_db_with_data(&db_path);

    let json = temp_out("export_json_and_xlsx", "json");
    rat()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &json])
        .assert()
        .success();
    let content = fs::read_to_string(&json).expect("read exported json");
    assert!(content.contains("\"student_name\": \"Alice\""));
    assert!(content.contains("\"percentage\": 100"));

    let xlsx = temp_out("export_json_and_xlsx", "xlsx");
    rat()
        .args(["--db", &db_path, "export", "--format", "xlsx", "--file", &xlsx])
        .assert()
        .success();
    assert!(fs::metadata(&xlsx).map(|m| m.len() > 0).unwrap_or(false));
}

#[test]
fn test_del_cascades_to_export() {
    let db_path = setup_test_db("del_cascades");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success()
        .stdout(contains("Student deleted successfully: Alice"));

    let out = temp_out("del_cascades", "csv");
    rat()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(!content.contains("Alice"));
    assert!(content.contains("2,Bob,1,0,1,0%"));
}

#[test]
fn test_db_check_passes_on_fresh_storage() {
    let db_path = setup_test_db("db_check_fresh");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));

    rat()
        .args(["--db", &db_path, "db"])
        .assert()
        .success()
        .stdout(contains("Students:"));
}

#[test]
fn test_json_backend_from_extension() {
    let db_path = setup_test_storage("json_backend", "json");
    init_db_with_data(&db_path);

    let raw = fs::read_to_string(&db_path).expect("read json storage");
    assert!(raw.contains("attendance_students"));
    assert!(raw.contains("attendance_records"));

    rat()
        .args(["--db", &db_path, "show", "--student", "2"])
        .assert()
        .success()
        .stdout(contains("Bob"))
        .stdout(contains("2024-01-01"));
}

#[test]
fn test_backup_copy_and_zip() {
    let db_path = setup_test_db("backup_copy_and_zip");
    init_db_with_data(&db_path);

    let copy = temp_out("backup_copy_and_zip", "sqlite");
    rat()
        .args(["--db", &db_path, "backup", "--file", &copy])
        .assert()
        .success();
    assert!(Path::new(&copy).exists());

    let zipped = temp_out("backup_copy_and_zip", "zip");
    rat()
        .args(["--db", &db_path, "backup", "--file", &copy, "--compress", "-f"])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&zipped).exists());
}

#[test]
fn test_relative_db_path_is_the_same_file_for_init_and_later_commands() {
    let mut dir = std::env::temp_dir();
    dir.push("rattendance_relative_db");
    fs::create_dir_all(&dir).expect("create work dir");
    let db_file = dir.join("class.sqlite");
    fs::remove_file(&db_file).ok();

    rat()
        .current_dir(&dir)
        .args(["--db", "class.sqlite", "--test", "init"])
        .assert()
        .success();
    assert!(db_file.exists());

    rat()
        .current_dir(&dir)
        .args(["--db", "class.sqlite", "add", "Alice", "1"])
        .assert()
        .success();

    let db_abs = db_file.to_string_lossy().to_string();
    rat()
        .args(["--db", &db_abs, "students"])
        .assert()
        .success()
        .stdout(contains("Alice"));
}

#[test]
fn test_shared_roll_number_asks_for_the_id() {
    let db_path = setup_test_db("shared_roll_number");
    init_db_with_students(&db_path);

    rat()
        .args(["--db", &db_path, "add", "Carol", "1"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .failure()
        .stderr(contains("shared by several students"));

    rat()
        .args(["--db", &db_path, "students"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Carol"));
}
