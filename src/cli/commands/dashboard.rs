use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{self, AttendanceBand, Thresholds};
use crate::db::open_store;
use crate::errors::AppResult;
use crate::ui::messages::{card, header};
use crate::utils::colors::colorize_percentage;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { date: date_arg } = cmd {
        let day = date::parse_optional_date(date_arg.as_deref())?;
        let store = open_store(cfg)?;

        let students = store.list_students()?;
        let records = store.list_attendance_records()?;
        let snapshot = stats::daily_snapshot(&students, &records, day);

        header(format!("Dashboard for {} ({})", day, date::weekday_name(day)));
        card("👥", "Total Students", snapshot.total_students);
        card("✅", "Present", snapshot.present);
        card("❌", "Absent", snapshot.absent);

        let band = AttendanceBand::classify(snapshot.average_attendance, Thresholds::from(cfg));
        card(
            "📈",
            "Avg. Attendance",
            colorize_percentage(snapshot.average_attendance, band),
        );

        if students.is_empty() {
            println!();
            header("Quick start");
            println!("  1. Add students:      rattendance add <NAME> <ROLL>");
            println!("  2. Mark attendance:   rattendance mark --present <ROLL>... --absent <ROLL>...");
            println!("  3. View reports:      rattendance report  (or: rattendance export)");
        }
    }

    Ok(())
}
