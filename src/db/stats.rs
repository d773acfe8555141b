use crate::db::backend::KvBackend;
use crate::db::store::RecordStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use chrono::NaiveDate;
use std::fs;

/// Summary of what the storage currently holds.
#[derive(Debug)]
pub struct StorageInfo {
    pub location: String,
    pub file_size: u64,
    pub keys: Vec<String>,
    pub students: usize,
    pub records: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

pub fn storage_info<B: KvBackend>(store: &RecordStore<B>, db_path: &str) -> AppResult<StorageInfo> {
    let records = store.list_attendance_records()?;

    Ok(StorageInfo {
        location: store.backend().describe(),
        file_size: fs::metadata(db_path).map(|m| m.len()).unwrap_or(0),
        keys: store.backend().keys()?,
        students: store.list_students()?.len(),
        records: records.len(),
        first_date: records.iter().map(|r| r.date).min(),
        last_date: records.iter().map(|r| r.date).max(),
    })
}

pub fn print_storage_info(info: &StorageInfo) {
    println!();

    let file_kb = (info.file_size as f64) / 1024.0;

    println!("{}• Storage:{} {}{}{}", CYAN, RESET, YELLOW, info.location, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);
    println!("{}• Keys:{} {}", CYAN, RESET, info.keys.join(", "));
    println!(
        "{}• Students:{} {}{}{}",
        CYAN, RESET, GREEN, info.students, RESET
    );
    println!(
        "{}• Attendance records:{} {}{}{}",
        CYAN, RESET, GREEN, info.records, RESET
    );

    let fmt_date = |d: Option<NaiveDate>| {
        d.map(|d| d.to_string())
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_date(info.first_date));
    println!("    to:   {}", fmt_date(info.last_date));

    if let (Some(f), Some(l)) = (info.first_date, info.last_date) {
        let days = (l - f).num_days() + 1;
        let avg = info.records as f64 / days as f64;
        println!("{}• Average records/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
}
