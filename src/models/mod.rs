pub mod attendance_record;
pub mod attendance_status;
pub mod report;
pub mod student;

pub use attendance_record::AttendanceRecord;
pub use attendance_status::AttendanceStatus;
pub use report::{DailySnapshot, StudentReport};
pub use student::Student;
