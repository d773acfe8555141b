use chrono::NaiveDate;
use rattendance::core::stats::{
    AttendanceBand, Thresholds, average_attendance, daily_snapshot, filter_range, percentage,
    student_reports,
};
use rattendance::export::range::{parse_optional_range, parse_range};
use rattendance::export::{REPORT_HEADERS, ReportRow};
use rattendance::models::{AttendanceRecord, AttendanceStatus, Student};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn example() -> (Vec<Student>, Vec<AttendanceRecord>) {
    let students = vec![Student::new("a", "A", "1"), Student::new("b", "B", "2")];
    let records = vec![
        AttendanceRecord::new("a", day(2024, 1, 1), AttendanceStatus::Present),
        AttendanceRecord::new("b", day(2024, 1, 1), AttendanceStatus::Absent),
    ];
    (students, records)
}

#[test]
fn test_percentage_rounds_half_up() {
    assert_eq!(percentage(0, 0), 0);
    assert_eq!(percentage(1, 2), 50);
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(1, 8), 13);
    assert_eq!(percentage(5, 5), 100);
}

#[test]
fn test_student_reports_example() {
    let (students, records) = example();
    let reports = student_reports(&students, &records);

    assert_eq!(reports.len(), 2);
    let a = &reports[0];
    assert_eq!(
        (a.present_days, a.absent_days, a.total_days, a.percentage),
        (1, 0, 1, 100)
    );
    let b = &reports[1];
    assert_eq!(
        (b.present_days, b.absent_days, b.total_days, b.percentage),
        (0, 1, 1, 0)
    );
}

#[test]
fn test_student_without_records_reports_zero() {
    let students = vec![Student::new("c", "C", "3")];
    let reports = student_reports(&students, &[]);
    assert_eq!(reports[0].total_days, 0);
    assert_eq!(reports[0].percentage, 0);
}

#[test]
fn test_average_attendance() {
    let (_, records) = example();
    assert_eq!(average_attendance(&records), 50);
    assert_eq!(average_attendance(&[]), 0);
}

#[test]
fn test_daily_snapshot_counts_whole_roster() {
    let (mut students, mut records) = example();
    students.push(Student::new("c", "C", "3"));
    records.push(AttendanceRecord::new(
        "c",
        day(2024, 1, 2),
        AttendanceStatus::Present,
    ));

    let snap = daily_snapshot(&students, &records, day(2024, 1, 1));
    assert_eq!(snap.total_students, 3);
    assert_eq!(snap.present, 1);
    assert_eq!(snap.absent, 1);
    // two present out of three records overall
    assert_eq!(snap.average_attendance, 67);

    let empty = daily_snapshot(&students, &records, day(2024, 5, 5));
    assert_eq!((empty.present, empty.absent), (0, 0));
}

#[test]
fn test_filter_range_is_inclusive() {
    let records = vec![
        AttendanceRecord::new("a", day(2024, 1, 31), AttendanceStatus::Present),
        AttendanceRecord::new("a", day(2024, 2, 1), AttendanceStatus::Present),
        AttendanceRecord::new("a", day(2024, 2, 29), AttendanceStatus::Absent),
        AttendanceRecord::new("a", day(2024, 3, 1), AttendanceStatus::Absent),
    ];

    let (from, to) = parse_range("2024-02").unwrap();
    let feb = filter_range(&records, from, to);
    assert_eq!(feb.len(), 2);
}

#[test]
fn test_parse_range_shapes() {
    assert_eq!(
        parse_range("2024").unwrap(),
        (day(2024, 1, 1), day(2024, 12, 31))
    );
    assert_eq!(
        parse_range("2023-12").unwrap(),
        (day(2023, 12, 1), day(2023, 12, 31))
    );
    assert_eq!(
        parse_range("2024-01-10:2024-01-20").unwrap(),
        (day(2024, 1, 10), day(2024, 1, 20))
    );
    assert_eq!(
        parse_range("2024-01:2024-03").unwrap(),
        (day(2024, 1, 1), day(2024, 3, 31))
    );

    assert!(parse_range("2024-01:2024-03-01").is_err());
    assert!(parse_range("2024-05:2024-01").is_err());
    assert!(parse_range("24-1").is_err());

    assert_eq!(parse_optional_range(None).unwrap(), None);
    assert_eq!(parse_optional_range(Some("all")).unwrap(), None);
}

#[test]
fn test_attendance_bands() {
    let t = Thresholds::default();
    assert_eq!(AttendanceBand::classify(75, t), AttendanceBand::Good);
    assert_eq!(AttendanceBand::classify(74, t), AttendanceBand::Warning);
    assert_eq!(AttendanceBand::classify(50, t), AttendanceBand::Warning);
    assert_eq!(AttendanceBand::classify(49, t), AttendanceBand::Low);
}

#[test]
fn test_report_row_cells_follow_header() {
    let (students, records) = example();
    let reports = student_reports(&students, &records);
    let row = ReportRow::from(&reports[0]);

    assert_eq!(
        REPORT_HEADERS,
        [
            "Roll Number",
            "Student Name",
            "Total Days",
            "Present",
            "Absent",
            "Attendance %"
        ]
    );
    assert_eq!(row.roll_number, "1");
    assert_eq!(row.student_name, "A");
    assert_eq!(row.percentage, 100);
}
