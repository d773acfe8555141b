#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test storage path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    setup_test_storage(name, "sqlite")
}

/// Same as `setup_test_db`, with an explicit extension (`sqlite` or `json`)
pub fn setup_test_storage(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.{}", name, ext));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize storage and register two students: Alice (roll 1) and Bob (roll 2)
pub fn init_db_with_students(db_path: &str) {
    rat()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rat()
        .args(["--db", db_path, "add", "Alice", "1"])
        .assert()
        .success();

    rat()
        .args(["--db", db_path, "add", "Bob", "2"])
        .assert()
        .success();
}

/// `init_db_with_students` plus Alice present and Bob absent on 2024-01-01
pub fn init_db_with_data(db_path: &str) {
    init_db_with_students(db_path);

    rat()
        .args([
            "--db",
            db_path,
            "mark",
            "--date",
            "2024-01-01",
            "--present",
            "1",
            "--absent",
            "2",
        ])
        .assert()
        .success();
}
